//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;

use super::defaults::*;
use super::{global_config_path, Config};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `VSED_` and use double underscores
    /// for nested values. For example:
    /// - `VSED_LEXICON__DATA_DIR=/srv/vsed/data`
    /// - `VSED_OUTPUT__FORMAT=markdown`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        // config crate doesn't apply serde defaults for missing sections
        let builder = set_config_default(builder, "lexicon.data_dir", DEFAULT_DATA_DIR)?;
        let builder =
            set_config_default(builder, "lexicon.symptoms_file", default_symptoms_file())?;
        let builder = set_config_default(builder, "lexicon.cui_file", default_cui_file())?;
        let builder =
            set_config_default(builder, "lexicon.longtail_file", default_longtail_file())?;
        let builder = set_config_default(builder, "output.format", "json")?;
        let mut builder = set_config_default(builder, "output.pretty", default_pretty())?;

        // Add the config file if it exists
        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        // Add environment variables with VSED_ prefix
        builder = builder.add_source(
            Environment::with_prefix("VSED")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.vsed/config.toml or custom --config path)
    /// 3. Environment variables (VSED_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        tracing::debug!("Loading configuration from {}", path.display());
        Self::from_file(&path)
    }
}
