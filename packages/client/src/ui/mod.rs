//! Terminal front end: CLI configuration, rendering and command dispatch.

pub mod config;
pub mod error;
pub mod formatter;
mod interactive;
mod runner;
pub mod view;

pub use config::{Cli, ClientConfig, Command};
pub use error::ClientError;
pub use interactive::{ChatCommand, InputEvent, parse_input, run_session};
pub use runner::{run_client, run_command, run_watch};
