use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the configured filter.
///
/// If a global subscriber is already installed it is kept, and the refusal is
/// reported through it.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        Ok(()) => debug!(filter = %config.filter, "logging initialized"),
        Err(err) => debug!(%err, "keeping the existing subscriber"),
    }
}
