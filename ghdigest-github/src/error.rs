//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// The token was rejected
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Non-success, non-rate-limit response
    #[error("GitHub API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<Error> for ghdigest_core::Error {
    fn from(err: Error) -> Self {
        ghdigest_core::Error::search(err)
    }
}
