//! Error types for the Gradalyze client.

use thiserror::Error;

/// Result type alias using the Gradalyze Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Gradalyze client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any network call (bad file type, empty grade
    /// list, out-of-range grade, blank subject).
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP/network request failed. Carries the server-supplied message
    /// when one was returned, otherwise an operation-specific fallback.
    #[error("Request error: {0}")]
    Request(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dossier rendering/export failed
    #[error("Dossier error: {0}")]
    Dossier(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
