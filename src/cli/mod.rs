//! CLI entry point for the exalsius client.

pub mod auth;

use clap::{Parser, Subcommand};

/// exalsius CLI
#[derive(Parser, Debug)]
#[command(name = "exalsius", version, about = "exalsius — GPU cloud client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in via the device-code flow
    Login(LoginArgs),
    /// Show login status
    Status,
    /// Remove stored credentials
    Logout,
}

/// Arguments for `exalsius login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Overall polling timeout in seconds
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,
}
