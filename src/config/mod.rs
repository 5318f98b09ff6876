//! Configuration management for the goodthing application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `GOODTHING_DIR`: Path to the data directory (defaults to ~/.goodthing)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{DEFAULT_DATA_SUBDIR, ENV_VAR_GOODTHING_DIR, ENV_VAR_HOME};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the goodthing application.
///
/// Holds the directory where journal data is stored. Loaded once at startup
/// with [`Config::load`] and handed to the storage layer; nothing else reads
/// the environment.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use goodthing::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where journal data files are stored.
    ///
    /// Loaded from the GOODTHING_DIR environment variable with a fallback
    /// to ~/.goodthing if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads `GOODTHING_DIR` with a fallback to `~/.goodthing`, expanding
    /// `~` and embedded environment variables via `shellexpand`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_GOODTHING_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory path: {}", e)))?;
        let data_dir = PathBuf::from(expanded.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or not
    /// absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
