use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth token payload issued by the identity provider.
///
/// A token without a `refresh_token` cannot be silently renewed; once
/// `expires_at` passes, the session is over and the user must log in again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_refresh: Option<DateTime<Utc>>,
    pub scopes: Option<Vec<String>>,
}

impl Token {
    /// Whether the access token is past its expiry.
    ///
    /// Tokens without an expiry timestamp are treated as still valid.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= Utc::now(),
            None => false,
        }
    }
}
