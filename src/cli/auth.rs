//! CLI handlers for login, status, and logout.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::store::FileTokenStore;
use crate::auth::{AuthError, AuthService, DeviceAuthClient, PollConfig};
use crate::config::AuthConfig;
use crate::error::Result;

fn service(config: &AuthConfig) -> Result<AuthService> {
    let store = Arc::new(FileTokenStore::new(config.store_config()));
    let client = DeviceAuthClient::new(config)?;
    Ok(AuthService::new(store, client))
}

/// Handle `exalsius login`.
pub async fn handle_login(timeout_secs: u64) -> Result<()> {
    let config = AuthConfig::from_env();
    let svc = service(&config)?;

    let session = svc.start_login().await?;
    let url = session
        .verification_uri_complete
        .as_deref()
        .unwrap_or(&session.verification_uri);
    println!("🔗 Visit: {url}");
    println!("📋 Enter code: {}", session.user_code);
    println!("⏳ Waiting for authorization...");

    let poll_config =
        PollConfig::for_session(&session).with_timeout(Duration::from_secs(timeout_secs));

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    match svc
        .wait_for_authorization(&session, &poll_config, &cancel)
        .await
    {
        Ok(_) => {
            println!("✅ Login successful!");
            Ok(())
        }
        Err(AuthError::Cancelled) => {
            eprintln!("Login cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle `exalsius status`.
pub async fn handle_status() -> Result<()> {
    let config = AuthConfig::from_env();
    let svc = service(&config)?;

    match svc.status()? {
        Some(token) => {
            let state = match token.expires_at {
                Some(expires) if expires > chrono::Utc::now() => {
                    format!("✅ Logged in (expires {})", expires.format("%Y-%m-%d %H:%M"))
                }
                Some(_) if token.refresh_token.is_some() => {
                    "⚠️  Session expired (will refresh on next use)".to_string()
                }
                Some(_) => "❌ Session expired; log in again".to_string(),
                None => "✅ Logged in".to_string(),
            };
            println!("{state}");
        }
        None => println!("❌ Not logged in"),
    }
    Ok(())
}

/// Handle `exalsius logout`.
pub async fn handle_logout() -> Result<()> {
    let config = AuthConfig::from_env();
    let svc = service(&config)?;
    svc.logout()?;
    println!("✅ Logged out");
    Ok(())
}
