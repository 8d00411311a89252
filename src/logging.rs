//! Diagnostic logging
//!
//! The terminal belongs to the UI, so tracing output goes to a log file in
//! the platform data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{QuipError, Result, APP_NAME, LOG_FILE};

/// Get the standard log file path
/// Uses $DATA_HOME/quipdeck/quipdeck.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        QuipError::LoggingError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber appending to `path`.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_at(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            QuipError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            QuipError::LoggingError(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
    {
        tracing::debug!(error = %e, path = %path.display(), "subscriber already installed, keeping it");
    }

    Ok(())
}

/// Install the global subscriber at the standard location.
pub fn init(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    init_at(&path, default_level)?;
    Ok(path)
}

/// Like [`init`], but a log sink that cannot be set up only costs the
/// diagnostics: the error is reported on stderr before the UI takes the
/// terminal and tracing stays a no-op.
pub fn init_or_continue(default_level: &str) -> Option<PathBuf> {
    continue_without_log(init(default_level))
}

fn continue_without_log(outcome: Result<PathBuf>) -> Option<PathBuf> {
    match outcome {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("{}; continuing without a log file", e);
            None
        }
    }
}
