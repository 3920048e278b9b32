//! Environment-driven client configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::store::TokenStoreConfig;

const DEFAULT_AUTH_DOMAIN: &str = "https://auth.exalsius.ai";
const DEFAULT_CLIENT_ID: &str = "0KdNLJicTEtqZQnBlqaHLSPTUbyWCVdm";
const DEFAULT_AUDIENCE: &str = "https://api.exalsius.ai";
const DEFAULT_SCOPE: &str = "openid profile email offline_access";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity-provider and token-storage settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the identity provider.
    pub domain: String,
    pub client_id: String,
    pub audience: String,
    pub scope: String,
    /// Directory holding persisted tokens.
    pub token_dir: PathBuf,
    /// Bound on each individual HTTP request, independent of the overall
    /// polling-session timeout.
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_AUTH_DOMAIN.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            token_dir: TokenStoreConfig::default_dir(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables (reading `.env` first,
    /// ignoring its absence).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        if let Ok(domain) = std::env::var("EXALSIUS_AUTH_DOMAIN") {
            config.domain = domain;
        }
        if let Ok(client_id) = std::env::var("EXALSIUS_AUTH_CLIENT_ID") {
            config.client_id = client_id;
        }
        if let Ok(audience) = std::env::var("EXALSIUS_AUTH_AUDIENCE") {
            config.audience = audience;
        }
        if let Ok(scope) = std::env::var("EXALSIUS_AUTH_SCOPE") {
            config.scope = scope;
        }
        if let Ok(dir) = std::env::var("EXALSIUS_TOKEN_DIR") {
            config.token_dir = PathBuf::from(dir);
        }
        config
    }

    /// Token-store configuration for this client.
    pub fn store_config(&self) -> TokenStoreConfig {
        TokenStoreConfig::new(self.token_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_exalsius_provider() {
        let config = AuthConfig::default();
        assert_eq!(config.domain, "https://auth.exalsius.ai");
        assert_eq!(config.audience, "https://api.exalsius.ai");
        assert!(config.scope.contains("offline_access"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn store_config_uses_configured_dir() {
        let config = AuthConfig {
            token_dir: PathBuf::from("/tmp/exalsius-test"),
            ..AuthConfig::default()
        };
        assert_eq!(
            config.store_config().base_dir,
            PathBuf::from("/tmp/exalsius-test")
        );
    }
}
