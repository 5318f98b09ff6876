//! Persisted user preferences.
//!
//! The storage contract reserves one key for a serialized boolean dark-mode
//! preference alongside the entry collection. The presentation layer owns
//! what the preference *means*; the core only round-trips it.

use crate::constants::THEME_STORAGE_KEY;
use crate::errors::{AppResult, FormatError, PersistenceError};
use crate::storage::StorageBackend;

/// Reads the persisted dark-mode preference; an absent key means light mode.
pub fn load_dark_mode<S: StorageBackend>(storage: &S) -> AppResult<bool> {
    match storage.read(THEME_STORAGE_KEY)? {
        Some(raw) => {
            let dark_mode = serde_json::from_str(&raw).map_err(FormatError::Parse)?;
            Ok(dark_mode)
        }
        None => Ok(false),
    }
}

/// Persists the dark-mode preference under the theme key.
pub fn save_dark_mode<S: StorageBackend>(storage: &S, dark_mode: bool) -> AppResult<()> {
    let raw = serde_json::to_string(&dark_mode).map_err(PersistenceError::Serialize)?;
    storage.write(THEME_STORAGE_KEY, &raw)?;
    Ok(())
}
