use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    /// The portfolio endpoint could not be reached.
    #[error("profile fetch failed: {0}")]
    Fetch(String),

    /// The portfolio endpoint answered with a non-2xx status.
    #[error("profile endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON, or a section the formatter
    /// depends on was missing.
    #[error("malformed profile document: {0}")]
    Parse(#[from] serde_json::Error),
}
