//! Default tracing logger installed when [ApplicationConfig](crate::config::ApplicationConfig)
//! requests it.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to `info`. Does nothing
/// if a global subscriber is already set.
pub fn install_tracing_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
