use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::PipelineError;
use crate::providers::openai::DEFAULT_DELIMITER;
use crate::translation::pipeline::DEFAULT_BATCH_SIZE;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language display name, passed through to the oracle verbatim
    /// (free-form: "Yoruba", "Fon", ...)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Number of cue texts packed into one oracle call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Delimiter used to join texts into one request and split the reply
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Oracle provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Oracle provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL, empty for the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            batch_size: default_batch_size(),
            delimiter: default_delimiter(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, creating a default config file if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save_to_file(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the tunables before a run starts
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.batch_size < 1 {
            return Err(PipelineError::InvalidConfiguration(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.delimiter.is_empty() {
            return Err(PipelineError::InvalidConfiguration(
                "delimiter must not be empty".to_string(),
            ));
        }
        if self.target_language.trim().is_empty() {
            return Err(PipelineError::InvalidConfiguration(
                "target_language must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// API key from the config file, falling back to the environment
    pub fn resolved_api_key(&self) -> String {
        if !self.api_key_is_empty() {
            return self.provider.api_key.clone();
        }
        std::env::var("OPENAI_API_KEY").unwrap_or_default()
    }

    fn api_key_is_empty(&self) -> bool {
        self.provider.api_key.trim().is_empty()
    }
}

// @returns: Default target language
fn default_target_language() -> String {
    "Yoruba".to_string()
}

// @returns: Default cue texts per oracle call
fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

// @returns: Default join/split delimiter
fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

// @returns: Default model name
fn default_model() -> String {
    "gpt-4-turbo".to_string()
}

// @returns: Default request timeout
fn default_timeout_secs() -> u64 {
    120
}
