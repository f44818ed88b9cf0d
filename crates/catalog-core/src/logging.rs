//! Tracing subscriber bootstrap.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Returns quietly
/// if a subscriber is already installed, so tests can call this freely.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init(),
        _ => fmt().with_env_filter(filter).try_init(),
    };

    // Already-initialized is fine; tests may race on this.
    let _ = result;
}
