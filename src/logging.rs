//! Logging initialization built on `tracing`.
//!
//! Supports plain-text and JSON output with `RUST_LOG`-style filtering; when
//! no filter is set in the environment, the crate logs at the default level
//! (debug when verbose mode is requested).

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `format` selects between plain-text and JSON output; `verbose` raises the
/// default level to debug. An explicit `RUST_LOG` always wins over both.
///
/// # Errors
///
/// Returns `AppError::Config` for an unknown format name or when a global
/// subscriber is already installed.
pub fn init_logging(format: &str, verbose: bool) -> AppResult<()> {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level)));

    let result = match format {
        LOG_FORMAT_JSON => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LOG_FORMAT_TEXT => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        other => {
            return Err(AppError::Config(format!(
                "Unknown log format: {} (expected {} or {})",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )))
        }
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
