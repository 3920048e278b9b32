use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::auth::device_code::{DeviceCodePoll, DeviceCodeSession};
use crate::auth::error::AuthError;
use crate::auth::token::Token;
use crate::config::AuthConfig;

const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";
const REFRESH_TOKEN_GRANT: &str = "refresh_token";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Device Authorization Grant client for the exalsius identity provider.
///
/// Speaks the provider's `POST /oauth/device/code` and `POST /oauth/token`
/// endpoints with form-encoded payloads; these paths and shapes are fixed by
/// the provider protocol. Every request is bounded by the configured request
/// timeout, independent of the overall polling-session deadline.
///
/// # Example
/// ```no_run
/// use exalsius::auth::DeviceAuthClient;
/// use exalsius::config::AuthConfig;
///
/// let client = DeviceAuthClient::new(&AuthConfig::from_env())?;
/// # Ok::<(), exalsius::auth::AuthError>(())
/// ```
pub struct DeviceAuthClient {
    client: reqwest::Client,
    device_code_url: String,
    token_url: String,
    client_id: String,
    audience: String,
    scope: String,
}

impl DeviceAuthClient {
    /// Build a client from configuration with a bounded-per-request
    /// `reqwest::Client`.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_http_client(config, client))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(config: &AuthConfig, client: reqwest::Client) -> Self {
        let base = config.domain.trim_end_matches('/');
        Self {
            client,
            device_code_url: format!("{base}/oauth/device/code"),
            token_url: format!("{base}/oauth/token"),
            client_id: config.client_id.clone(),
            audience: config.audience.clone(),
            scope: config.scope.clone(),
        }
    }

    /// Request a fresh device code to start a login attempt.
    pub async fn request_device_code(&self) -> Result<DeviceCodeSession, AuthError> {
        let resp = self
            .client
            .post(&self.device_code_url)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("scope", self.scope.as_str()),
                ("audience", self.audience.as_str()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "Device code request failed with status {}",
                resp.status()
            )));
        }
        let payload: DeviceCodeResponse = resp.json().await?;
        let expires_at = Utc::now() + Duration::seconds(payload.expires_in as i64);
        Ok(DeviceCodeSession {
            verification_uri: payload.verification_uri,
            verification_uri_complete: payload.verification_uri_complete,
            user_code: payload.user_code,
            device_code: payload.device_code,
            interval_secs: payload.interval.unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            expires_at,
        })
    }

    /// One token-exchange attempt for a device-code session.
    ///
    /// Transient provider states (`authorization_pending`, `slow_down`) come
    /// back as [`DeviceCodePoll`] continuations, never as errors.
    pub async fn poll_device_code(
        &self,
        session: &DeviceCodeSession,
    ) -> Result<DeviceCodePoll, AuthError> {
        if Utc::now() >= session.expires_at {
            return Ok(DeviceCodePoll::Expired { description: None });
        }
        let resp = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", DEVICE_CODE_GRANT),
                ("device_code", session.device_code.as_str()),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await?;
        if resp.status().is_success() {
            let payload: TokenResponse = resp.json().await?;
            return Ok(DeviceCodePoll::Authorized {
                token: payload.into_token(None),
            });
        }

        let status = resp.status();
        let raw = resp.text().await?;
        let body: OAuthErrorBody = serde_json::from_str(&raw).map_err(|_| {
            AuthError::InvalidResponse(format!(
                "Token request failed with status {status}: {raw}"
            ))
        })?;
        Ok(match body.error.as_str() {
            "authorization_pending" => DeviceCodePoll::Pending,
            "slow_down" => DeviceCodePoll::SlowDown,
            "expired_token" => DeviceCodePoll::Expired {
                description: body.error_description,
            },
            "access_denied" => DeviceCodePoll::Denied {
                description: body.error_description,
            },
            _ => {
                return Err(AuthError::Provider {
                    code: body.error,
                    description: body.error_description.unwrap_or_default(),
                });
            }
        })
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Providers may rotate the refresh token or omit it from the response;
    /// when omitted, the previous one stays valid and is carried over.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError> {
        let resp = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", REFRESH_TOKEN_GRANT),
                ("refresh_token", refresh_token),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await?;
        if resp.status() == StatusCode::UNAUTHORIZED || resp.status() == StatusCode::FORBIDDEN {
            return Err(AuthError::SessionExpired);
        }
        if !resp.status().is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "Token refresh failed with status {}",
                resp.status()
            )));
        }
        let payload: TokenResponse = resp.json().await?;
        Ok(payload.into_token(Some(refresh_token.to_string())))
    }
}

#[derive(Debug, Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    #[serde(default)]
    verification_uri_complete: Option<String>,
    expires_in: u64,
    #[serde(default)]
    interval: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
}

impl TokenResponse {
    fn into_token(self, fallback_refresh: Option<String>) -> Token {
        Token {
            access_token: self.access_token,
            id_token: self.id_token,
            refresh_token: self.refresh_token.or(fallback_refresh),
            expires_at: self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
            last_refresh: Some(Utc::now()),
            scopes: self
                .scope
                .map(|s| s.split_whitespace().map(str::to_string).collect()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}
