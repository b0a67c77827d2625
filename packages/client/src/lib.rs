//! Chat-room API client library.
//!
//! This library provides a typed client for the Watchparty chat API
//! (messages, room name, user profile) and the terminal front end built on it.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{Cli, run_client};
