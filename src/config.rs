//! Configuration module for gavel.

use serde::Deserialize;
use std::path::Path;

use crate::{GavelError, Result};

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Language code (zh / en).
    #[serde(default = "default_language")]
    pub language: String,
    /// Path to the directory containing locale files.
    #[serde(default = "default_locales_dir")]
    pub dir: String,
}

fn default_language() -> String {
    crate::i18n::DEFAULT_LOCALE.to_string()
}

fn default_locales_dir() -> String {
    "locales".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            dir: default_locales_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace / debug / info / warn / error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; console-only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Locale settings.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GavelError::Validation(format!("config parse error: {e}")))
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.locale.language.trim().is_empty() {
            return Err(GavelError::Validation(
                "locale.language must not be empty".to_string(),
            ));
        }

        const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(GavelError::Validation(format!(
                "unknown logging.level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
