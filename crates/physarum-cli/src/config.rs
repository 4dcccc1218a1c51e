//! Configuration loading for the Physarum CLI.

use anyhow::{Context, Result};
use physarum::prelude::RouterConfig;
use std::path::Path;

/// Load a router configuration from a TOML file, or defaults when no
/// path is given. Any field may be omitted in the file.
pub fn load(path: Option<&Path>) -> Result<RouterConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<RouterConfig>(&raw)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => RouterConfig::default(),
    };
    config
        .validate()
        .context("invalid router configuration")?;
    Ok(config)
}
