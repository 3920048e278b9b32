//! Error types for the exalsius client.

use thiserror::Error;

/// Primary error type for all exalsius client operations.
#[derive(Error, Debug)]
pub enum ExalsiusError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Login timed out; try logging in again")]
    AuthTimeout,

    #[error("Login cancelled")]
    Cancelled,

    #[error(transparent)]
    Resolve(#[from] crate::resolve::ResolveError),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ExalsiusError>;
