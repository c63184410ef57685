use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Looked up in the working directory. Missing is fine.
pub const CONFIG_FILE: &str = "procurement.toml";

const ENV_PREFIX: &str = "PROCUREMENT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Defaults, then the file at `path`, then `PROCUREMENT_*` environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        ::config::Config::builder()
            .set_default("log_filter", "info")?
            .add_source(::config::File::from(path).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration")
    }
}
