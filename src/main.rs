//! exalsius CLI binary entry point.

use clap::Parser;
use exalsius::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login(args) => exalsius::cli::auth::handle_login(args.timeout).await,
        Commands::Status => exalsius::cli::auth::handle_status().await,
        Commands::Logout => exalsius::cli::auth::handle_logout().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
