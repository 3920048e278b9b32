//! Device-code polling loop.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::device_code::{DeviceCodePoll, DeviceCodeSession};
use super::error::AuthError;
use super::provider::DeviceAuthClient;
use super::token::Token;

/// Polling parameters for one login session.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Wait before each attempt; grows on `slow_down`, never shrinks.
    pub initial_interval: Duration,
    /// Overall wall-clock budget for the session.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(300),
        }
    }
}

impl PollConfig {
    /// Start from the interval the provider handed out with the session.
    pub fn for_session(session: &DeviceCodeSession) -> Self {
        Self {
            initial_interval: Duration::from_secs(session.interval_secs),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Poll the token endpoint until the user authorizes, the session deadline
/// passes, the provider reports a terminal state, or `cancel` fires.
///
/// The deadline is checked before each sleep, so a timeout shorter than the
/// interval still yields exactly one attempt. `authorization_pending` and
/// `slow_down` are loop continuations, not failures; `slow_down` widens the
/// interval by one second. Cancellation interrupts a sleep immediately and
/// surfaces as [`AuthError::Cancelled`], distinct from any auth failure.
pub async fn poll_until_authorized(
    client: &DeviceAuthClient,
    session: &DeviceCodeSession,
    config: &PollConfig,
    cancel: &CancellationToken,
) -> Result<Token, AuthError> {
    let start = Instant::now();
    let mut interval = config.initial_interval;

    loop {
        if cancel.is_cancelled() {
            return Err(AuthError::Cancelled);
        }
        if start.elapsed() > config.timeout {
            return Err(AuthError::Timeout {
                after: config.timeout,
            });
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(AuthError::Cancelled),
            _ = tokio::time::sleep(interval) => {}
        }

        match client.poll_device_code(session).await? {
            DeviceCodePoll::Authorized { token } => return Ok(token),
            DeviceCodePoll::Pending => {
                debug!(interval_secs = interval.as_secs(), "authorization pending");
            }
            DeviceCodePoll::SlowDown => {
                interval += Duration::from_secs(1);
                debug!(
                    interval_secs = interval.as_secs(),
                    "provider asked to slow down"
                );
            }
            DeviceCodePoll::Denied { description } => {
                return Err(AuthError::AccessDenied(description.unwrap_or_else(|| {
                    "authorization request was denied".to_string()
                })));
            }
            DeviceCodePoll::Expired { description } => {
                return Err(AuthError::ExpiredGrant(description.unwrap_or_else(|| {
                    "device code is no longer valid".to_string()
                })));
            }
        }
    }
}
