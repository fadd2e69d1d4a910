//! Cached profile document with a staleness policy.
//!
//! The store owns the single live [`ProfileRecord`]. Nothing refreshes it in
//! the background; staleness is checked lazily, on access.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::document::ProfileDocument;
use crate::error::Result;

/// How long a fetched document stays fresh.
pub const STALE_AFTER: Duration = Duration::from_secs(300);

/// Source of profile documents. Production uses an HTTP client; tests plug
/// in fixtures.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ProfileDocument>;
}

/// The most recently fetched document plus when it was fetched.
///
/// Records are replaced wholesale on refresh, never edited. The monotonic
/// instant drives the staleness check; the wall-clock time is for display.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub document: Arc<ProfileDocument>,
    pub fetched_at: Instant,
    pub fetched_wall: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// Owns the cache slot and the fetcher that refills it.
pub struct ProfileStore<F> {
    fetcher: F,
    stale_after: Duration,
    record: Mutex<Option<ProfileRecord>>,
}

impl<F: ProfileFetcher> ProfileStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_stale_after(fetcher, STALE_AFTER)
    }

    pub fn with_stale_after(fetcher: F, stale_after: Duration) -> Self {
        Self {
            fetcher,
            stale_after,
            record: Mutex::new(None),
        }
    }

    /// The cached record, if any. Never triggers a fetch.
    pub async fn cached(&self) -> Option<ProfileRecord> {
        self.record.lock().await.clone()
    }

    /// Return the cached record, refreshing first when none exists or the
    /// cached one has crossed the staleness threshold.
    ///
    /// The slot lock is held across the fetch, so concurrent callers
    /// collapse into one outbound request: late arrivals block, then find
    /// the record the winning call installed and return it without fetching.
    /// On fetch or parse failure the slot keeps its previous record and the
    /// error propagates to the access that triggered the refresh.
    pub async fn get_or_refresh(&self) -> Result<ProfileRecord> {
        let mut slot = self.record.lock().await;

        if let Some(record) = slot.as_ref() {
            if record.age() <= self.stale_after {
                return Ok(record.clone());
            }
            debug!(
                "profile record is {}s old, refreshing",
                record.age().as_secs()
            );
        } else {
            debug!("no profile record yet, fetching");
        }

        let document = self.fetcher.fetch().await?;
        let record = ProfileRecord {
            document: Arc::new(document),
            fetched_at: Instant::now(),
            fetched_wall: Utc::now(),
        };
        *slot = Some(record.clone());
        Ok(record)
    }
}
