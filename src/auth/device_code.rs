use chrono::{DateTime, Utc};

use super::Token;

/// Device-code session issued at the start of a login attempt.
///
/// Created once per login, consumed by the poller, and discarded after
/// success, failure, or timeout. Never persisted.
#[derive(Debug, Clone)]
pub struct DeviceCodeSession {
    pub verification_uri: String,
    pub verification_uri_complete: Option<String>,
    pub user_code: String,
    pub device_code: String,
    pub interval_secs: u64,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a single poll attempt against the token endpoint.
#[derive(Debug, Clone)]
pub enum DeviceCodePoll {
    /// User has not approved yet; keep polling.
    Pending,
    /// Server-mandated backpressure; widen the interval.
    SlowDown,
    /// User authorized; token issued.
    Authorized { token: Token },
    /// User denied the request.
    Denied { description: Option<String> },
    /// The device code expired before the user authorized.
    Expired { description: Option<String> },
}
