//! Error types for the IDL viewer

use thiserror::Error;

/// Main error type for IDL viewer operations
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to parse IDL JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed IDL document: {0}")]
    FormatError(String),

    #[error("{kind} '{name}' not found")]
    EntityNotFound { kind: String, name: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error {status}: {url}")]
    HttpError { status: u16, url: String },
}

impl ViewerError {
    /// Shape error for `what`, keeping the underlying serde message
    pub(crate) fn format(what: impl std::fmt::Display, source: impl std::fmt::Display) -> Self {
        ViewerError::FormatError(format!("{}: {}", what, source))
    }
}

/// Result type alias for IDL viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;
