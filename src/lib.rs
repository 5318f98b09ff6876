/*!
# Goodthing

Goodthing is a gratitude journal built around one rule: one short note per
calendar day. It keeps the authoritative entry collection in an entry store
backed by durable key-value storage, and computes the calendar month grid
and the consecutive-day streak from that collection.

## Core Features

- Record, edit and delete one entry per calendar day
- Month calendar grid with today/selected/entry markers
- Consecutive-day streak ending today (365-day lookback)
- Tags extracted from `#word` tokens in entry text, with tag filtering and
  content search
- Export and import of the whole collection as a JSON snapshot
- Persisted dark-mode preference

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `entry`: the journal entry model and tag extraction
- `store`: the entry store owning the collection and its persistence
- `calendar`: pure month-grid/streak/count computations
- `storage`: the key-value storage contract and its file-backed implementation
- `prefs`: the persisted theme preference
- `config`: configuration loading and validation
- `cli`: command-line interface handling using clap
- `errors`: error handling infrastructure
- `logging`: tracing subscriber setup

## Usage Example

```rust,no_run
use goodthing::config::Config;
use goodthing::storage::{ensure_data_directory_exists, FileStorage};
use goodthing::store::EntryStore;

fn main() -> goodthing::AppResult<()> {
    // Load configuration and open the store
    let config = Config::load()?;
    ensure_data_directory_exists(&config.data_dir)?;
    let mut store = EntryStore::open(FileStorage::new(&config.data_dir))?;

    // Record today's good thing, unless one is already there
    let today = chrono::Local::now().date_naive();
    if store.find_by_date(today).is_none() {
        store.add(today, "Saw a sunset #joy")?;
    }
    Ok(())
}
```
*/

/// Pure calendar and streak computations
pub mod calendar;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Journal entry model and tag extraction
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Logging initialization
pub mod logging;
/// Persisted user preferences
pub mod prefs;
/// Durable key-value storage surface
pub mod storage;
/// The entry store owning the journal collection
pub mod store;

// Re-export important types for convenience
pub use calendar::{DayCell, MonthGrid};
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{EntryId, JournalEntry};
pub use errors::{AppError, AppResult};
pub use storage::{FileStorage, StorageBackend};
pub use store::EntryStore;
