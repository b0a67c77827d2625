//! CLI chat client for the Watchparty chat-room API.
//!
//! Run with:
//! ```not_rust
//! WATCHPARTY_API_KEY=... cargo run --bin watchparty-client -- --room 1 chat
//! ```

use clap::Parser;
use watchparty_client::{Cli, run_client, ui::ClientError};
use watchparty_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    match run_client(cli).await {
        Ok(()) => {}
        // Already logged by the command itself
        Err(ClientError::CommandFailed { .. }) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(1);
        }
    }
}
