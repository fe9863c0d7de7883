//! Configuration loading and parsing for `pr-policy.toml` files.
use log::*;
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

use crate::{error::PolicyError, result::Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "pr-policy.toml";

/// Toggles for the individual rules run by the `all` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct RulesConfig {
    /// Warn when more than one person is assigned (default: true)
    pub assignee_count: bool,
    /// Apply a semantic version label to the PR (default: true)
    pub patch_label: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            assignee_count: true,
            patch_label: true,
        }
    }
}

/// Root configuration structure for `pr-policy.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which rules are enabled.
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config: Config =
                    toml::from_str(&content).map_err(PolicyError::from)?;
                debug!("loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no configuration found: using default");
                Ok(Config::default())
            }
            Err(err) => Err(PolicyError::invalid_config(format!(
                "failed to read {}: {err}",
                path.display()
            ))
            .into()),
        }
    }
}
