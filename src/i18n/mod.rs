//! Localized message catalogs.
//!
//! Denial reasons surface to end users, so their wording is part of the
//! product contract. Catalogs are TOML files, one per locale, flattened
//! to dotted keys:
//!
//! ```no_run
//! use gavel::i18n::I18n;
//!
//! let messages = I18n::load("zh", "locales").unwrap();
//! let text = messages.t("moderation.resume_denied");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Default locale; the product's original language.
pub const DEFAULT_LOCALE: &str = "zh";

/// I18n-related errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to read a catalog file.
    #[error("failed to read locale file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse a catalog file.
    #[error("failed to parse locale file: {0}")]
    Parse(#[from] toml::de::Error),

    /// No catalog file exists for the locale.
    #[error("locale not found: {0}")]
    LocaleNotFound(String),
}

/// Result type for i18n operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// A loaded message catalog for one locale.
#[derive(Debug, Clone)]
pub struct I18n {
    locale: String,
    messages: HashMap<String, String>,
}

impl I18n {
    /// Load the catalog for a locale from a directory of TOML files.
    pub fn load<P: AsRef<Path>>(locale: &str, locales_dir: P) -> Result<Self> {
        let path = locales_dir.as_ref().join(format!("{locale}.toml"));
        if !path.exists() {
            return Err(I18nError::LocaleNotFound(locale.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        Self::from_str(locale, &content)
    }

    /// Build a catalog from a TOML string.
    ///
    /// Useful for tests and embedded catalogs.
    pub fn from_str(locale: &str, content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;

        let mut messages = HashMap::new();
        flatten("", &toml::Value::Table(table), &mut messages);

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    /// Create an empty catalog; every lookup echoes its key.
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    /// The catalog's locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of loaded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no messages are loaded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Look up a message by dotted key.
    ///
    /// An unknown key returns the key itself, so missing translations are
    /// visible instead of silent.
    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a message and substitute `{name}` placeholders.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut message = self.t(key);
        for (name, value) in params {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        message
    }
}

/// Flatten nested TOML tables into dotted keys.
fn flatten(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let full_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&full_key, nested, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
