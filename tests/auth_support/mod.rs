#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use exalsius::auth::{AuthError, DeviceCodeSession, Token, TokenStore};
use exalsius::config::AuthConfig;

#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: Mutex<HashMap<String, Token>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, profile: &str, token: Token) {
        self.tokens
            .lock()
            .expect("store lock poisoned")
            .insert(profile.to_string(), token);
    }

    pub fn get(&self, profile: &str) -> Option<Token> {
        self.tokens
            .lock()
            .expect("store lock poisoned")
            .get(profile)
            .cloned()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self, profile: &str) -> Result<Option<Token>, AuthError> {
        Ok(self.get(profile))
    }

    fn save(&self, profile: &str, token: &Token) -> Result<(), AuthError> {
        self.tokens
            .lock()
            .expect("store lock poisoned")
            .insert(profile.to_string(), token.clone());
        Ok(())
    }

    fn clear(&self, profile: &str) -> Result<(), AuthError> {
        self.tokens
            .lock()
            .expect("store lock poisoned")
            .remove(profile);
        Ok(())
    }
}

pub fn token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        id_token: None,
        refresh_token: None,
        expires_at: None,
        last_refresh: Some(Utc::now()),
        scopes: None,
    }
}

pub fn expired_token(access_token: &str, refresh_token: Option<&str>) -> Token {
    Token {
        access_token: access_token.to_string(),
        id_token: None,
        refresh_token: refresh_token.map(str::to_string),
        expires_at: Some(Utc::now() - chrono::Duration::minutes(5)),
        last_refresh: None,
        scopes: None,
    }
}

pub fn test_config(server_uri: &str) -> AuthConfig {
    AuthConfig {
        domain: server_uri.to_string(),
        client_id: "test-client".to_string(),
        audience: "https://api.exalsius.test".to_string(),
        scope: "openid offline_access".to_string(),
        request_timeout: Duration::from_secs(5),
        ..AuthConfig::default()
    }
}

pub fn active_session(interval_secs: u64) -> DeviceCodeSession {
    DeviceCodeSession {
        verification_uri: "https://auth.exalsius.ai/activate".to_string(),
        verification_uri_complete: None,
        user_code: "ABCD-EFGH".to_string(),
        device_code: "device-code-1".to_string(),
        interval_secs,
        expires_at: Utc::now() + chrono::Duration::minutes(10),
    }
}
