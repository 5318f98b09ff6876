//! Constants used throughout the application.
//!
//! This module contains all constants used in the Goodthing application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "goodthing";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A gratitude journal that records one good thing per day";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Goodthing data directory.
pub const ENV_VAR_GOODTHING_DIR: &str = "GOODTHING_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".goodthing";

// Durable Storage
/// Storage key holding the serialized entry collection.
pub const ENTRIES_STORAGE_KEY: &str = "oneGoodThingEntries";
/// Storage key holding the serialized dark-mode preference.
pub const THEME_STORAGE_KEY: &str = "oneGoodThingDarkMode";
/// File extension used for stored values on disk.
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// Default POSIX permissions for the data directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Maximum number of days the streak walk looks back from today.
pub const STREAK_LOOKBACK_DAYS: i64 = 365;
/// Number of day columns in a calendar week row.
pub const DAYS_PER_WEEK: u32 = 7;

// Tags
/// Pattern matching a `#` marker followed by word characters; the first
/// capture group is the tag without the marker.
pub const TAG_PATTERN: &str = r"#(\w+)";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
