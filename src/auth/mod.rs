//! OAuth device-code login flow and token storage.

pub mod device_code;
pub mod error;
pub mod poller;
pub mod provider;
pub mod service;
pub mod store;
pub mod token;

pub use device_code::{DeviceCodePoll, DeviceCodeSession};
pub use error::AuthError;
pub use poller::{poll_until_authorized, PollConfig};
pub use provider::DeviceAuthClient;
pub use service::AuthService;
pub use store::{FileTokenStore, TokenStore, TokenStoreConfig};
pub use token::Token;
