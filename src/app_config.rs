/*!
 * Application configuration: loading, validating and saving settings.
 */

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::document::DEFAULT_PHONETIC_PREFIX;
use crate::script_wrapper::{ScriptRange, ScriptWrapper};

// @const: LaTeX environment names accepted for script runs
static ENVIRONMENT_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]+$").expect("environment name pattern is valid")
});

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Label written before each phonetic transcription
    #[serde(default = "default_phonetic_prefix")]
    pub phonetic_prefix: String,

    /// Extension of generated documents
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Script detection config
    #[serde(default)]
    pub script: ScriptConfig,

    /// Document template config
    #[serde(default)]
    pub template: TemplateConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Which characters get wrapped, and in which environment
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScriptConfig {
    // @field: Code point range, e.g. "U+0C80-U+0CFF"
    #[serde(default)]
    pub range: ScriptRange,

    // @field: LaTeX environment wrapped around each run
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl ScriptConfig {
    // @returns: Wrapper for this range and environment
    pub fn wrapper(&self) -> ScriptWrapper {
        ScriptWrapper::new(self.range, &self.environment)
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            range: ScriptRange::default(),
            environment: default_environment(),
        }
    }
}

/// Document template configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TemplateConfig {
    /// Replacement preamble; the built-in book preamble is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble_path: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Check that `environment` is usable as a LaTeX environment name
pub fn validate_environment(environment: &str) -> Result<()> {
    if !ENVIRONMENT_NAME_REGEX.is_match(environment) {
        return Err(anyhow!(
            "Invalid LaTeX environment name '{}': only ASCII letters are allowed",
            environment
        ));
    }

    Ok(())
}

fn default_phonetic_prefix() -> String {
    DEFAULT_PHONETIC_PREFIX.to_string()
}

fn default_output_extension() -> String {
    "tex".to_string()
}

fn default_environment() -> String {
    "kannada".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        validate_environment(&self.script.environment)?;

        if self.output_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        if let Some(preamble_path) = &self.template.preamble_path {
            if !preamble_path.is_file() {
                return Err(anyhow!("Preamble file not found: {}", preamble_path.display()));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            phonetic_prefix: default_phonetic_prefix(),
            output_extension: default_output_extension(),
            script: ScriptConfig::default(),
            template: TemplateConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
