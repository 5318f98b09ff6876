//! The entry store: authoritative owner of the journal collection.
//!
//! # Responsibility
//! - Enforce the one-entry-per-calendar-day invariant at the store level.
//! - Persist the full collection after every mutation.
//! - Parse and validate imported snapshots; serialize exports.
//!
//! # Invariants
//! - The in-memory collection always mirrors what was last persisted: a
//!   failed persist rolls the mutation back before the error is returned.
//! - `content` is trimmed and non-empty on every write path.
//! - Import replaces the whole collection; there is no merge.

use crate::constants::ENTRIES_STORAGE_KEY;
use crate::entry::{EntryId, JournalEntry};
use crate::errors::{AppResult, FormatError, NotFoundError, PersistenceError, ValidationError};
use crate::storage::StorageBackend;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

/// Owns the journal entry collection and its persistence.
///
/// Constructed once at startup via [`EntryStore::open`], which loads the
/// persisted collection; every mutation persists before returning. The
/// storage backend is injected so tests can run against an in-memory
/// implementation.
///
/// # Examples
///
/// ```no_run
/// use goodthing::storage::FileStorage;
/// use goodthing::store::EntryStore;
/// use chrono::NaiveDate;
///
/// let storage = FileStorage::new("/home/user/.goodthing");
/// let mut store = EntryStore::open(storage).expect("Failed to open store");
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// store.add(date, "Saw a sunset #joy").expect("Failed to add entry");
/// ```
pub struct EntryStore<S: StorageBackend> {
    storage: S,
    entries: Vec<JournalEntry>,
}

impl<S: StorageBackend> EntryStore<S> {
    /// Opens the store, loading the persisted collection from storage.
    ///
    /// An absent entries key yields an empty store; a present but
    /// unparseable value is a `FormatError` so corruption is surfaced
    /// instead of silently wiping data.
    pub fn open(storage: S) -> AppResult<Self> {
        let entries = match storage.read(ENTRIES_STORAGE_KEY)? {
            Some(raw) => parse_snapshot(&raw)?,
            None => Vec::new(),
        };
        debug!(count = entries.len(), "loaded journal entries");
        Ok(Self { storage, entries })
    }

    /// The full collection in storage order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries in the collection.
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Looks up the entry for a calendar day.
    ///
    /// Equality is calendar-day equality on `NaiveDate` (year, month, day);
    /// time-of-day and timezone never enter into it because they are not
    /// representable in the key type.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Records a new entry for a day.
    ///
    /// Content is trimmed before validation. Fails with
    /// `ValidationError::EmptyContent` for blank text and
    /// `ValidationError::DuplicateDate` if the day already has an entry;
    /// in both cases the store is unchanged.
    pub fn add(&mut self, date: NaiveDate, content: &str) -> AppResult<&JournalEntry> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        if self.find_by_date(date).is_some() {
            return Err(ValidationError::DuplicateDate { date }.into());
        }

        let entry = JournalEntry::new(date, trimmed, Utc::now().timestamp_millis());
        self.entries.push(entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }

        info!(%date, "added journal entry");
        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Replaces the content (and derived tags) of an existing entry.
    ///
    /// `id`, `date` and `timestamp` are unchanged. Fails with
    /// `NotFoundError` for an unknown id and `ValidationError::EmptyContent`
    /// for blank text, leaving the collection untouched either way.
    pub fn update(&mut self, id: EntryId, content: &str) -> AppResult<&JournalEntry> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(NotFoundError { id })?;

        let previous = self.entries[index].clone();
        self.entries[index].set_content(trimmed);
        if let Err(e) = self.persist() {
            self.entries[index] = previous;
            return Err(e);
        }

        info!(%id, "updated journal entry");
        Ok(&self.entries[index])
    }

    /// Removes an entry by id and returns it.
    ///
    /// Fails with `NotFoundError` for an unknown id so the caller is always
    /// informed whether anything was deleted.
    pub fn remove(&mut self, id: EntryId) -> AppResult<JournalEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(NotFoundError { id })?;

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        info!(%id, "removed journal entry");
        Ok(removed)
    }

    /// Serializes the full collection as a pretty-printed JSON snapshot.
    ///
    /// The snapshot preserves collection order and round-trips through
    /// [`EntryStore::import_all`].
    pub fn export_all(&self) -> AppResult<String> {
        let snapshot =
            serde_json::to_string_pretty(&self.entries).map_err(PersistenceError::Serialize)?;
        Ok(snapshot)
    }

    /// Replaces the whole collection with the entries in a snapshot.
    ///
    /// The snapshot must parse into the expected record shape; the first
    /// malformed record fails the import with `FormatError` and the
    /// existing collection stays as it was. There is no merge.
    pub fn import_all(&mut self, raw: &str) -> AppResult<()> {
        let imported = parse_snapshot(raw)?;
        let previous = std::mem::replace(&mut self.entries, imported);
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }

        info!(count = self.entries.len(), "imported journal snapshot");
        Ok(())
    }

    /// Entries whose content contains `text`, case-insensitively.
    pub fn search(&self, text: &str) -> Vec<&JournalEntry> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.content.to_lowercase().contains(&needle))
            .collect()
    }

    /// Entries carrying `tag`, case-insensitively.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Writes the full collection to storage under the entries key.
    fn persist(&self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.entries).map_err(PersistenceError::Serialize)?;
        self.storage.write(ENTRIES_STORAGE_KEY, &raw)?;
        Ok(())
    }
}

/// Parses snapshot text into entries, validating each record's shape.
///
/// Records are checked one at a time so the error can name the offending
/// index: unparseable id/date/field types surface through serde, and an
/// entry whose content trims to empty is rejected explicitly.
fn parse_snapshot(raw: &str) -> Result<Vec<JournalEntry>, FormatError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(FormatError::Parse)?;

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let entry: JournalEntry =
            serde_json::from_value(record).map_err(|e| FormatError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;
        if entry.content.trim().is_empty() {
            return Err(FormatError::InvalidRecord {
                index,
                reason: "content is empty".to_string(),
            });
        }
        entries.push(entry);
    }
    Ok(entries)
}
