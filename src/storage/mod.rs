//! Durable key-value storage surface.
//!
//! The storage contract is deliberately small: two well-known keys (the
//! entry collection and the theme preference), whole-value reads and
//! overwrites, no partial updates. `StorageBackend` is the seam the entry
//! store is constructed with, so tests can substitute an in-memory
//! implementation.

use crate::constants::STORAGE_FILE_EXTENSION;
use crate::errors::{AppError, AppResult, PersistenceError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Whole-value key-value persistence.
///
/// Reads return absent-or-value; writes replace the full value for a key.
pub trait StorageBackend {
    /// Returns the stored value for `key`, or `None` if nothing has been
    /// written under it yet.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Overwrites the full value for `key`.
    ///
    /// The write must be atomic: a concurrent reader sees either the old
    /// value or the new one, never a partial write.
    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// File-backed storage: one `<key>.json` file per key under a data
/// directory.
///
/// Writes go through a temporary file in the same directory followed by a
/// rename, which is what makes the atomicity guarantee hold.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `root`. The directory must already exist;
    /// see [`ensure_data_directory_exists`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{STORAGE_FILE_EXTENSION}"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Read { path, source: e }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for_key(key);

        // Temp file must live in the same directory as the target so the
        // final rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| PersistenceError::Write {
            path: path.clone(),
            source: e,
        })?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| PersistenceError::Write {
                path: path.clone(),
                source: e,
            })?;
        tmp.persist(&path).map_err(|e| PersistenceError::Write {
            path,
            source: e.error,
        })?;

        debug!(key, bytes = value.len(), "stored value written");
        Ok(())
    }
}

/// Ensures the data directory exists, creating it if necessary.
///
/// The path must be absolute. On unix the directory is created with `0o700`
/// permissions so journal data stays private to the owner.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not absolute
/// - `AppError::Io` if directory creation or permission setting fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            use std::os::unix::fs::PermissionsExt;

            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_key_returns_none() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let storage = FileStorage::new(temp_dir.path());

        let value = storage.read("neverWritten").expect("read should not fail");
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let storage = FileStorage::new(temp_dir.path());

        storage.write("oneGoodThingEntries", "[]").expect("write failed");
        let value = storage.read("oneGoodThingEntries").expect("read failed");
        assert_eq!(value.as_deref(), Some("[]"));

        // The value lands in a file named after the key.
        assert!(temp_dir.path().join("oneGoodThingEntries.json").exists());
    }

    #[test]
    fn test_write_overwrites_whole_value() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let storage = FileStorage::new(temp_dir.path());

        storage.write("key", "first").expect("write failed");
        storage.write("key", "second").expect("write failed");

        let value = storage.read("key").expect("read failed");
        assert_eq!(value.as_deref(), Some("second"));
    }

    #[test]
    fn test_write_into_missing_directory_fails_with_write_error() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let missing_root = temp_dir.path().join("does_not_exist");
        let storage = FileStorage::new(&missing_root);

        let result = storage.write("key", "value");
        match result {
            Err(PersistenceError::Write { path, .. }) => {
                assert!(path.starts_with(&missing_root));
            }
            _ => panic!("Expected PersistenceError::Write"),
        }
    }

    #[test]
    fn test_ensure_data_directory_exists_creates_directory() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let data_dir = temp_dir.path().join("journal_data");
        assert!(!data_dir.exists());

        ensure_data_directory_exists(&data_dir).expect("Failed to create directory");

        assert!(data_dir.is_dir());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(&data_dir).expect("Failed to get directory metadata");
            assert_eq!(metadata.permissions().mode() & 0o777, 0o700);
        }
    }

    #[test]
    fn test_ensure_data_directory_exists_accepts_existing_directory() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        ensure_data_directory_exists(temp_dir.path()).expect("existing directory should be fine");
    }

    #[test]
    fn test_ensure_data_directory_exists_rejects_relative_path() {
        let result = ensure_data_directory_exists(Path::new("relative/data/dir"));
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("must be absolute")),
            _ => panic!("Expected AppError::Config variant"),
        }
    }
}
