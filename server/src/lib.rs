mod config;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use crate::config::{CONFIG_FILE, Config};

/// Load configuration and set up tracing.
///
/// Must run before `dioxus::serve`, which installs its own default subscriber.
pub fn init() -> Result<Config> {
    let config = Config::load()?;

    if init_tracing(&config) {
        tracing::info!(log_filter = %config.log_filter, "server initialised");
    } else {
        tracing::warn!(
            log_filter = %config.log_filter,
            "a tracing subscriber was already installed; configured filter ignored"
        );
    }

    Ok(config)
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Does nothing and returns `false` if a global subscriber already exists.
pub fn init_tracing(config: &Config) -> bool {
    if tracing::dispatcher::has_been_set() {
        return false;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
    true
}
