//! Error types for the htmlcheck core library
//!
//! Local configuration problems are the only errors `validate` raises;
//! transport failures are absorbed into the returned result as data. The
//! reporter raises `ValidationFailed` after printing a failing result so
//! command-line callers can gate on it.

use thiserror::Error;

/// Main error type for htmlcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid caller-supplied options, raised before any network I/O
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// IO errors (reading the document in filename mode)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client construction and request building errors
    #[error("HTTP request error: {message}")]
    HttpRequest {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A reported result did not validate; carries a one-line synopsis
    #[error("Validation failed: {synopsis}")]
    ValidationFailed { synopsis: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
