//! QuipDeck - a terminal joke and quote widget
//!
//! Fetches a random joke or a random quote from two public HTTP APIs and
//! shows them on one of three screens (home, joke, quote).

use std::fmt;
use std::time::Duration;

pub mod api;
pub mod app;
pub mod config;
pub mod logging;

// Common error types
#[derive(Debug)]
pub enum QuipError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// HTTP client could not be constructed
    HttpError(String),
    /// Log sink could not be installed
    LoggingError(String),
}

impl fmt::Display for QuipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuipError::IoError(err) => write!(f, "I/O error: {}", err),
            QuipError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuipError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuipError::HttpError(msg) => write!(f, "HTTP client error: {}", msg),
            QuipError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for QuipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuipError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuipError {
    fn from(err: std::io::Error) -> Self {
        QuipError::IoError(err)
    }
}

impl From<toml::de::Error> for QuipError {
    fn from(err: toml::de::Error) -> Self {
        QuipError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuipError {
    fn from(err: toml::ser::Error) -> Self {
        QuipError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

impl From<reqwest::Error> for QuipError {
    fn from(err: reqwest::Error) -> Self {
        QuipError::HttpError(err.to_string())
    }
}

/// Result type alias for QuipDeck operations
pub type Result<T> = std::result::Result<T, QuipError>;

// Common types and constants
pub const APP_NAME: &str = "quipdeck";
pub const CONFIG_FILE: &str = "quipdeck.toml";
pub const LOG_FILE: &str = "quipdeck.log";

/// Key value shipped in the default config; treated the same as no key.
pub const QUOTE_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// How long the "funny" button stays inert after being pressed.
pub const FEEDBACK_COOLDOWN: Duration = Duration::from_millis(1500);
