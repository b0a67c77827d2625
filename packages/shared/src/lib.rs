//! Shared utilities for the Watchparty chat client.

pub mod logger;
pub mod time;
