//! Configuration module for vsed
//!
//! This module provides configuration structures and loading mechanisms. The
//! configuration says where the three lexicon files live and how score reports
//! are rendered. It can be loaded from TOML files and/or environment variables.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumString};

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.vsed/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".vsed").join("config.toml"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Lexicon file locations
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the three tab-separated vocabulary files
///
/// File names are resolved against `data_dir` unless they are absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Directory holding the lexicon files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Full symptom lexicon
    #[serde(default = "default_symptoms_file")]
    pub symptoms_file: String,

    /// CUI-mapped symptom lexicon
    #[serde(default = "default_cui_file")]
    pub cui_file: String,

    /// Long-tail symptom lexicon
    #[serde(default = "default_longtail_file")]
    pub longtail_file: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            symptoms_file: default_symptoms_file(),
            cui_file: default_cui_file(),
            longtail_file: default_longtail_file(),
        }
    }
}

impl LexiconConfig {
    /// Creates a config reading the default file names from `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Resolved path of the file backing `vocabulary`
    pub fn path_for(&self, vocabulary: Vocabulary) -> PathBuf {
        let file = match vocabulary {
            Vocabulary::Full => &self.symptoms_file,
            Vocabulary::Cui => &self.cui_file,
            Vocabulary::Longtail => &self.longtail_file,
        };
        self.data_dir.join(file)
    }
}

/// Report format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// Nested JSON object keyed by vocabulary
    #[default]
    Json,
    /// Markdown table of the derived rates
    Markdown,
}

/// Report rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON reports
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        for vocabulary in Vocabulary::ALL {
            let file = match vocabulary {
                Vocabulary::Full => &self.lexicon.symptoms_file,
                Vocabulary::Cui => &self.lexicon.cui_file,
                Vocabulary::Longtail => &self.lexicon.longtail_file,
            };
            if file.trim().is_empty() {
                return Err(Error::config(format!(
                    "lexicon file for the '{vocabulary}' vocabulary must not be empty"
                )));
            }
        }

        if self.lexicon.data_dir.as_os_str().is_empty() {
            return Err(Error::config(
                "lexicon.data_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
