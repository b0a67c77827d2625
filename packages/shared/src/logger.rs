//! Logger setup shared by the Watchparty binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to this
/// application's crates and everything else is limited to `warn`.
/// Output goes to stderr so stdout stays free for rendered chat messages.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(app_name, default_level)));

    let result = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        // A subscriber is already installed (e.g. in tests); keep using it.
        tracing::debug!("Logger already initialized: {}", e);
    }
}

/// Build the fallback filter directives for `app_name`.
///
/// Binary names use `-` while module paths use `_`. The shared crate of the
/// same workspace is enabled at the same level.
pub fn default_directives(app_name: &str, default_level: &str) -> String {
    let crate_name = app_name.replace('-', "_");
    let prefix = crate_name
        .split('_')
        .next()
        .unwrap_or(crate_name.as_str())
        .to_string();

    if prefix == crate_name {
        format!("warn,{crate_name}={default_level}")
    } else {
        format!("warn,{crate_name}={default_level},{prefix}_shared={default_level}")
    }
}
