//! Error types for ghdigest

use thiserror::Error;

/// Result type alias for ghdigest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ghdigest operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No GitHub token could be found
    #[error("GitHub token not found: {0}")]
    MissingCredential(String),

    /// A search against the upstream API failed
    #[error("Search failed: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Report data did not match the requested report layout
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an API client failure
    pub fn search(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Search(Box::new(err))
    }
}
