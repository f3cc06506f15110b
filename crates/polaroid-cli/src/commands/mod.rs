pub mod compose;
pub mod config;
pub mod frame;

use std::path::Path;

use anyhow::{Context, Result};
use polaroid_core::config::CollageConfig;

/// Load a TOML config, or fall back to the built-in A4 layout.
pub fn load_config(path: Option<&Path>) -> Result<CollageConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid collage config")
        }
        None => Ok(CollageConfig::default()),
    }
}
