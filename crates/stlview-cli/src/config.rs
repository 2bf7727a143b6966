//! Optional TOML configuration.
//!
//! ```toml
//! [limits]
//! size_tolerance = 2
//! max_triangle_count = 10000000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use stlview_core::SniffLimits;
use tracing::debug;

/// Contents of `--config`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub limits: SniffLimits,
}

impl CliConfig {
    /// Parse and check a config document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(text).context("invalid config")?;
        config.limits.validate().context("invalid [limits]")?;
        debug!(limits = ?config.limits, "config parsed");
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
