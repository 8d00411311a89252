//! Configuration management module
//!
//! Handles loading, saving, and validation of the API endpoints and the
//! quote service credential.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{QuipError, Result, APP_NAME, CONFIG_FILE, QUOTE_KEY_PLACEHOLDER};

pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_QUOTE_URL: &str = "https://api.api-ninjas.com/v1/quotes";

/// Endpoint URL plus optional key for one external service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredential {
    /// Full URL requested with GET
    pub url: String,
    /// Value sent in the `X-Api-Key` header, if the service needs one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ApiCredential {
    /// Credential for an endpoint that needs no key
    pub fn open(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
        }
    }

    /// Credential carrying a key
    pub fn keyed(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: Some(api_key.into()),
        }
    }

    /// The usable key, or `None` when it is unset, blank, or the placeholder
    pub fn usable_key(&self) -> Option<&str> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) if key == QUOTE_KEY_PLACEHOLDER => None,
            Some(key) => Some(key),
        }
    }

    fn validate(&self, service: &str) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(QuipError::ConfigError(format!(
                "{} endpoint must be an http(s) URL: {}",
                service, self.url
            )));
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub joke: ApiCredential,
    pub quote: ApiCredential,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            joke: ApiCredential::open(DEFAULT_JOKE_URL),
            quote: ApiCredential::keyed(DEFAULT_QUOTE_URL, QUOTE_KEY_PLACEHOLDER),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    ///
    /// A missing or placeholder quote key is not an error: the quote screen
    /// reports it instead.
    pub fn validate(&self) -> Result<()> {
        self.joke.validate("Joke")?;
        self.quote.validate("Quote")?;

        if self.log_level.trim().is_empty() {
            return Err(QuipError::ConfigError(
                "Log level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_joke_url(mut self, url: impl Into<String>) -> Self {
        self.joke.url = url.into();
        self
    }

    pub fn with_quote_url(mut self, url: impl Into<String>) -> Self {
        self.quote.url = url.into();
        self
    }

    pub fn with_quote_key(mut self, key: impl Into<String>) -> Self {
        self.quote.api_key = Some(key.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            QuipError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuipError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuipError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            QuipError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quipdeck/quipdeck.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuipError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
