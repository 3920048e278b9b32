use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::device_code::DeviceCodeSession;
use super::error::AuthError;
use super::poller::{poll_until_authorized, PollConfig};
use super::provider::DeviceAuthClient;
use super::store::TokenStore;
use super::token::Token;

/// Pure service facade for the login lifecycle.
///
/// All I/O decisions (printing, prompting, exit codes) belong to the caller.
/// `AuthService` only returns typed results and errors.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use exalsius::auth::{AuthService, DeviceAuthClient, FileTokenStore, TokenStoreConfig};
/// use exalsius::config::AuthConfig;
///
/// let config = AuthConfig::from_env();
/// let store = Arc::new(FileTokenStore::new(config.store_config()));
/// let svc = AuthService::new(store, DeviceAuthClient::new(&config)?);
/// # Ok::<(), exalsius::auth::AuthError>(())
/// ```
pub struct AuthService {
    store: Arc<dyn TokenStore>,
    client: DeviceAuthClient,
    profile: String,
}

impl AuthService {
    pub fn new(store: Arc<dyn TokenStore>, client: DeviceAuthClient) -> Self {
        Self {
            store,
            client,
            profile: "default".to_string(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Begin a login: request a device code for the caller to display.
    pub async fn start_login(&self) -> Result<DeviceCodeSession, AuthError> {
        self.client.request_device_code().await
    }

    /// Poll until the user authorizes, then persist and return the token.
    pub async fn wait_for_authorization(
        &self,
        session: &DeviceCodeSession,
        config: &PollConfig,
        cancel: &CancellationToken,
    ) -> Result<Token, AuthError> {
        let token = poll_until_authorized(&self.client, session, config, cancel).await?;
        self.store.save(&self.profile, &token)?;
        Ok(token)
    }

    /// Current usable token, refreshing an expired one when possible.
    ///
    /// An expired token without a refresh token cannot be renewed; the
    /// session is over and the user must log in again.
    pub async fn current_token(&self) -> Result<Token, AuthError> {
        let token = self
            .store
            .load(&self.profile)?
            .ok_or(AuthError::NotLoggedIn)?;
        if !token.is_expired() {
            return Ok(token);
        }
        let Some(refresh_token) = token.refresh_token else {
            return Err(AuthError::SessionExpired);
        };
        debug!("access token expired; refreshing");
        let refreshed = self.client.refresh(&refresh_token).await?;
        self.store.save(&self.profile, &refreshed)?;
        Ok(refreshed)
    }

    /// Stored token, if any, without refreshing.
    pub fn status(&self) -> Result<Option<Token>, AuthError> {
        self.store.load(&self.profile)
    }

    /// Remove stored credentials. Succeeds when already logged out.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear(&self.profile)
    }
}
