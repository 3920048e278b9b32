use std::time::Duration;

use thiserror::Error;

use crate::error::ExalsiusError;

/// Authentication errors for the device-code login flow.
///
/// `authorization_pending` and `slow_down` never appear here; they are loop
/// continuations surfaced through [`DeviceCodePoll`](super::DeviceCodePoll).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Session expired; log in again")]
    SessionExpired,
    #[error("Login timed out after {after:?}; try logging in again")]
    Timeout { after: Duration },
    #[error("Login cancelled")]
    Cancelled,
    #[error("Access denied: {0}")]
    AccessDenied(String),
    #[error("Device code expired: {0}")]
    ExpiredGrant(String),
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::de::Error> for AuthError {
    fn from(error: toml::de::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::ser::Error> for AuthError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<AuthError> for ExalsiusError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Timeout { .. } => ExalsiusError::AuthTimeout,
            AuthError::Cancelled => ExalsiusError::Cancelled,
            other => ExalsiusError::Authentication(other.to_string()),
        }
    }
}
