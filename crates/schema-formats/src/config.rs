//! Configuration parsing from formats.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::RegistryError;
use crate::registry::{FormatRegistry, RegistryBuilder};

/// File read by [`Config::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "formats.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub formats: FormatsConfig,
}

/// `[formats]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormatsConfig {
    /// Built-in or aliased names to remove from the registry
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Extra names bound to an existing format, e.g. `uriref = "uri-reference"`
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Register the draft-03 names `ip-address` and `host-name`
    #[serde(default)]
    pub legacy_names: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no format config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(path = %path.display(), "loaded format config");
        Ok(config)
    }

    /// Load configuration from the default path (./formats.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Build a registry from the `[formats]` section
    pub fn registry(&self) -> Result<FormatRegistry, RegistryError> {
        RegistryBuilder::from_config(&self.formats).map(RegistryBuilder::build)
    }
}
