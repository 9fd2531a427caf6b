//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Installing twice is a no-op, so
/// repeated calls from tests are harmless.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
