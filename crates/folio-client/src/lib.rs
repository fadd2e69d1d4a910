//! HTTP client for the gitconnected portfolio API.
//!
//! Thin wrapper over reqwest that fetches one person's profile document and
//! feeds it to the core's [`ProfileStore`](folio_core::ProfileStore) through
//! the [`ProfileFetcher`] trait.
//!
//! # Example
//! ```rust,no_run
//! use folio_client::PortfolioClient;
//! use folio_core::{FieldKind, ProfileStore, ProfileVars};
//!
//! #[tokio::main]
//! async fn main() -> folio_core::Result<()> {
//!     let client = PortfolioClient::new(folio_client::DEFAULT_ENDPOINT);
//!     let vars = ProfileVars::new(ProfileStore::new(client));
//!
//!     println!("{}", vars.value(FieldKind::About).await?);
//!     Ok(())
//! }
//! ```
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use folio_core::{FolioError, ProfileDocument, ProfileFetcher, Result};

/// The portfolio this REPL serves by default.
pub const DEFAULT_ENDPOINT: &str = "https://gitconnected.com/v1/portfolio/adarshdigievo";

/// A client bound to one portfolio endpoint.
///
/// Cheap to construct; the underlying reqwest client pools connections, so
/// one instance should be reused for the life of the session.
pub struct PortfolioClient {
    http: Client,
    endpoint: String,
}

impl PortfolioClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET against the endpoint, parsed into a [`ProfileDocument`].
    ///
    /// Network failures map to [`FolioError::Fetch`], non-2xx answers to
    /// [`FolioError::Status`], and undecodable bodies to
    /// [`FolioError::Parse`].
    pub async fn fetch_document(&self) -> Result<ProfileDocument> {
        debug!("GET {}", self.endpoint);
        let resp = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FolioError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FolioError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FolioError::Fetch(e.to_string()))?;
        let document = serde_json::from_str(&body)?;
        Ok(document)
    }
}

#[async_trait]
impl ProfileFetcher for PortfolioClient {
    async fn fetch(&self) -> Result<ProfileDocument> {
        self.fetch_document().await
    }
}
