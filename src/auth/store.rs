use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::token::Token;

/// Storage abstraction for persisted login tokens.
pub trait TokenStore: Send + Sync {
    fn load(&self, profile: &str) -> Result<Option<Token>, AuthError>;
    fn save(&self, profile: &str, token: &Token) -> Result<(), AuthError>;
    fn clear(&self, profile: &str) -> Result<(), AuthError>;
}

/// Configuration for file-backed token storage.
#[derive(Debug, Clone)]
pub struct TokenStoreConfig {
    pub base_dir: PathBuf,
}

impl TokenStoreConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn default_dir() -> PathBuf {
        default_exalsius_dir()
    }
}

/// File-backed token store using one TOML file per profile.
///
/// # Example
/// ```no_run
/// use exalsius::auth::{FileTokenStore, Token, TokenStore};
///
/// let store = FileTokenStore::new_default();
/// let token = Token {
///     access_token: "access".to_string(),
///     id_token: None,
///     refresh_token: Some("refresh".to_string()),
///     expires_at: None,
///     last_refresh: None,
///     scopes: None,
/// };
/// store.save("default", &token)?;
/// # Ok::<(), exalsius::auth::AuthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(config: TokenStoreConfig) -> Self {
        Self {
            base_dir: config.base_dir,
        }
    }

    pub fn new_default() -> Self {
        Self {
            base_dir: default_exalsius_dir(),
        }
    }

    fn token_path(&self, profile: &str) -> PathBuf {
        let profile = normalize_label(profile);
        let name = if profile == "default" {
            "token.toml".to_string()
        } else {
            format!("token.{profile}.toml")
        };
        self.base_dir.join(name)
    }

    fn ensure_parent(path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, profile: &str) -> Result<Option<Token>, AuthError> {
        let path = self.token_path(profile);
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AuthError::Io(err.to_string())),
        };
        let file: TokenFile = toml::from_str(&raw)?;
        Ok(Some(file.token))
    }

    fn save(&self, profile: &str, token: &Token) -> Result<(), AuthError> {
        let path = self.token_path(profile);
        Self::ensure_parent(&path)?;
        let file = TokenFile {
            version: 1,
            profile: profile.to_string(),
            token: token.clone(),
            saved_at: Utc::now(),
        };
        let serialized = toml::to_string(&file)?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self, profile: &str) -> Result<(), AuthError> {
        let path = self.token_path(profile);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    version: u32,
    profile: String,
    token: Token,
    saved_at: DateTime<Utc>,
}

fn default_exalsius_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".exalsius"))
        .unwrap_or_else(|| PathBuf::from(".exalsius"))
}

fn normalize_label(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "default".to_string();
    }
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() || lower == '-' {
            out.push(lower);
        } else {
            out.push('-');
        }
    }
    if out.trim_matches('-').is_empty() {
        "default".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileTokenStore) {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(TokenStoreConfig::new(dir.path().to_path_buf()));
        (dir, store)
    }

    fn sample_token() -> Token {
        Token {
            access_token: "access".to_string(),
            id_token: Some("id".to_string()),
            refresh_token: Some("refresh".to_string()),
            expires_at: None,
            last_refresh: None,
            scopes: Some(vec!["openid".to_string()]),
        }
    }

    #[test]
    fn token_round_trip_works() {
        let (_dir, store) = temp_store();
        store.save("default", &sample_token()).unwrap();
        let loaded = store.load("default").unwrap().unwrap();
        assert_eq!(loaded.access_token, "access");
        assert_eq!(loaded.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(loaded.scopes, Some(vec!["openid".to_string()]));
    }

    #[test]
    fn default_profile_uses_plain_file_name() {
        let (dir, store) = temp_store();
        store.save("default", &sample_token()).unwrap();
        assert!(dir.path().join("token.toml").exists());
    }

    #[test]
    fn named_profile_gets_its_own_file() {
        let (dir, store) = temp_store();
        store.save("staging", &sample_token()).unwrap();
        assert!(dir.path().join("token.staging.toml").exists());
        assert!(store.load("default").unwrap().is_none());
    }

    #[test]
    fn load_missing_token_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load("default").unwrap().is_none());
    }

    #[test]
    fn clear_removes_token() {
        let (_dir, store) = temp_store();
        store.save("default", &sample_token()).unwrap();
        store.clear("default").unwrap();
        assert!(store.load("default").unwrap().is_none());
    }

    #[test]
    fn clear_missing_token_succeeds() {
        let (_dir, store) = temp_store();
        store.clear("default").unwrap();
    }
}
