//! Error handling utilities for the goodthing application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Errors raised by the entry store and the import/export paths are modelled
//! as dedicated types (`ValidationError`, `NotFoundError`, `FormatError`,
//! `PersistenceError`) so callers can match on the failure category; all of
//! them convert into `AppError` through `From`.

use crate::entry::EntryId;
use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents rule violations when creating or editing journal entries.
///
/// These errors are recoverable at the boundary: the caller is expected to
/// surface the message to the user and leave the store untouched.
///
/// # Examples
///
/// ```
/// use goodthing::errors::ValidationError;
/// use chrono::NaiveDate;
///
/// let error = ValidationError::DuplicateDate {
///     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// };
/// assert!(format!("{}", error).contains("2024-03-01"));
/// ```
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Entry text was empty or whitespace-only after trimming.
    #[error("Entry content cannot be empty. Write at least one good thing before saving.")]
    EmptyContent,

    /// An entry already exists for the requested calendar day.
    #[error("An entry already exists for {date}. Edit the existing entry instead of adding another one.")]
    DuplicateDate {
        /// The day that already has an entry.
        date: NaiveDate,
    },
}

/// Raised when an update or removal targets an id that is not in the store.
#[derive(Debug, Error)]
#[error("no entry with id {id}; it may have been deleted already")]
pub struct NotFoundError {
    /// The id that failed to resolve.
    pub id: EntryId,
}

/// Represents failures to parse an imported snapshot into the expected
/// entry shape.
///
/// A snapshot must be a JSON array of entry records; each record needs a
/// parseable id and date and non-empty content. The first offending record
/// fails the whole import and the store is left unchanged.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The snapshot text is not valid JSON at all.
    #[error("Snapshot is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The snapshot parsed, but one record does not have the expected shape.
    #[error("Snapshot record {index} is invalid: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the snapshot array.
        index: usize,
        /// Human-readable description of what is wrong with the record.
        reason: String,
    },
}

/// Represents failures of the durable storage layer.
///
/// A persistence failure never silently drops an in-memory mutation: the
/// store rolls the mutation back before returning one of these, so memory
/// and storage stay in agreement.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A stored value could not be read.
    #[error("Failed to read stored value from {path}: {source}. Check file permissions and that the data directory is accessible.")]
    Read {
        /// Path of the value that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A stored value could not be written.
    #[error("Failed to write stored value to {path}: {source}. Check free disk space and file permissions.")]
    Write {
        /// Path of the value that failed to save.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The collection could not be serialized for storage or export.
    #[error("Failed to serialize journal data: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents all possible errors that can occur in the goodthing application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Converting from an IO error:
///
/// ```
/// use goodthing::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A user-supplied date string could not be parsed.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Entry rule violations (empty content, duplicate day).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An update or removal targeted an unknown entry id.
    #[error("Entry not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// An imported snapshot failed structural validation.
    #[error("Import format error: {0}")]
    Format(#[from] FormatError),

    /// The durable storage layer failed to read or write.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use goodthing::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
