//! exalsius — client-side identity and resolution toolkit
//!
//! Building blocks for the exalsius GPU-cloud CLI: an OAuth 2.0 device-code
//! login flow (device-code issuance, polling, token refresh, token storage)
//! and a name/ID resolver for fetched resource lists.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use exalsius::auth::{AuthService, DeviceAuthClient, FileTokenStore, PollConfig};
//! use exalsius::config::AuthConfig;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), exalsius::auth::AuthError> {
//! let config = AuthConfig::from_env();
//! let store = Arc::new(FileTokenStore::new(config.store_config()));
//! let svc = AuthService::new(store, DeviceAuthClient::new(&config)?);
//! let session = svc.start_login().await?;
//! println!("visit {} and enter {}", session.verification_uri, session.user_code);
//! let token = svc
//!     .wait_for_authorization(
//!         &session,
//!         &PollConfig::for_session(&session),
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! println!("logged in as {}", token.access_token);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod resolve;

#[cfg(feature = "cli")]
pub mod cli;
