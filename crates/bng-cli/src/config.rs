//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for the global flags:
//!
//! ```yaml
//! figs: 8
//! format: json
//! ```
//!
//! Precedence is command-line flag, then config file, then built-in
//! default (`figs: 6`, `format: text`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bng_core::Figures;

use crate::output::OutputFormat;

/// Contents of a `bng` config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Default precision for `from-osgb36`.
    pub figs: Option<Figures>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Precision for `from-osgb36` when `--figs` is not given.
    pub figs: Figures,
    /// Output format for both subcommands.
    pub format: OutputFormat,
}

impl Settings {
    /// Merge the global `--format` flag over an optional config file.
    pub fn resolve(config_path: Option<&Path>, format: Option<OutputFormat>) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        Ok(Self {
            figs: config.figs.unwrap_or_default(),
            format: format.or(config.format).unwrap_or_default(),
        })
    }
}
