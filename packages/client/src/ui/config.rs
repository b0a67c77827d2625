//! Command-line configuration.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::domain::{ApiKey, RoomId};

use super::error::ClientError;

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// CLI chat client for the Watchparty chat-room API.
#[derive(Parser)]
#[command(name = "watchparty-client", version, about, long_about = None)]
pub struct Cli {
    /// Origin of the chat API
    #[arg(long, env = "WATCHPARTY_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key sent as the X-API-Key header
    #[arg(long, env = "WATCHPARTY_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Room to read from and post to
    #[arg(long = "room", env = "WATCHPARTY_ROOM_ID", default_value_t = 1)]
    pub room_id: u64,

    /// Polling period in milliseconds
    #[arg(long, env = "WATCHPARTY_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "WATCHPARTY_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the room's messages once and print them
    Messages,
    /// Post a message to the room
    Post {
        /// Message text
        text: String,
    },
    /// Poll the room and redraw the message list on every update
    Watch,
    /// Interactive chat: poll the room and post every line typed
    Chat,
    /// Rename the room
    RenameRoom {
        /// New room name
        name: String,
    },
    /// Change your username
    SetUsername {
        /// New username
        name: String,
    },
    /// Change your password
    SetPassword {
        /// New password
        password: String,
    },
}

/// Validated client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: ApiKey,
    pub room_id: RoomId,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Validate the raw CLI values.
    pub fn from_cli(cli: &Cli) -> Result<Self, ClientError> {
        let base_url = cli.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with http:// or https:// (got: {})",
                cli.base_url
            )));
        }
        if cli.poll_interval_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        if cli.request_timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_key: ApiKey::new(cli.api_key.clone())?,
            room_id: RoomId::new(cli.room_id)?,
            poll_interval: Duration::from_millis(cli.poll_interval_ms),
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
        })
    }
}
