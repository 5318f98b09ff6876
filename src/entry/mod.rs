//! Journal entry model and tag extraction.
//!
//! # Responsibility
//! - Define the `JournalEntry` record stored and exported by the entry store.
//! - Derive the tag set from entry content.
//!
//! # Invariants
//! - `id`, `date` and `timestamp` never change after creation.
//! - `tags` is always the result of `extract_tags(&content)`.

use crate::constants::TAG_PATTERN;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TAG_PATTERN).expect("valid tag regex"));

/// Stable identifier for a journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One journal record for a single calendar day.
///
/// Serialized field names match the snapshot format: `date` is an ISO
/// `YYYY-MM-DD` string, `timestamp` is the creation instant in epoch
/// milliseconds, and the optional `mood`/`hasImage` fields are passthrough
/// data some snapshot versions carry. The core never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable id assigned at creation.
    pub id: EntryId,
    /// Calendar day the entry belongs to.
    pub date: NaiveDate,
    /// The user's note. Never empty or whitespace-only when persisted.
    pub content: String,
    /// Creation instant in epoch milliseconds.
    pub timestamp: i64,
    /// Tags extracted from `content`; duplicates preserved as found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Optional mood label carried through import/export untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Optional image flag carried through import/export untouched.
    #[serde(default, rename = "hasImage", skip_serializing_if = "Option::is_none")]
    pub has_image: Option<bool>,
}

impl JournalEntry {
    /// Creates a new entry with a generated id and tags derived from the
    /// content.
    ///
    /// The caller supplies the creation instant so the model itself stays
    /// clock-free.
    pub fn new(date: NaiveDate, content: impl Into<String>, timestamp: i64) -> Self {
        let content = content.into();
        let tags = extract_tags(&content);
        Self {
            id: Uuid::new_v4(),
            date,
            content,
            timestamp,
            tags,
            mood: None,
            has_image: None,
        }
    }

    /// Replaces the note text and recomputes the tag set.
    ///
    /// `id`, `date` and `timestamp` are left untouched.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.tags = extract_tags(&self.content);
    }
}

/// Scans content for `#word` tokens and returns the tags without the marker.
///
/// Duplicates within one entry are preserved as found; content with no
/// matching token yields an empty set.
///
/// # Examples
///
/// ```
/// use goodthing::entry::extract_tags;
///
/// assert_eq!(extract_tags("hello #joy"), vec!["joy"]);
/// assert!(extract_tags("no tags here").is_empty());
/// ```
pub fn extract_tags(content: &str) -> Vec<String> {
    TAG_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_extract_tags_basic() {
        assert_eq!(extract_tags("grateful for #coffee this morning"), vec!["coffee"]);
    }

    #[test]
    fn test_extract_tags_multiple_and_duplicates_preserved() {
        assert_eq!(
            extract_tags("#joy ran with #dog, more #joy"),
            vec!["joy", "dog", "joy"]
        );
    }

    #[test]
    fn test_extract_tags_none() {
        assert!(extract_tags("a plain sentence").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn test_extract_tags_stops_at_non_word_characters() {
        assert_eq!(extract_tags("#well-rested"), vec!["well"]);
        assert_eq!(extract_tags("ship it! #v2_final"), vec!["v2_final"]);
    }

    #[test]
    fn test_new_entry_derives_tags_and_keeps_fields() {
        let entry = JournalEntry::new(march_first(), "walked at sunrise #calm", 1_709_251_200_000);
        assert_eq!(entry.date, march_first());
        assert_eq!(entry.content, "walked at sunrise #calm");
        assert_eq!(entry.timestamp, 1_709_251_200_000);
        assert_eq!(entry.tags, vec!["calm"]);
        assert!(entry.mood.is_none());
        assert!(entry.has_image.is_none());
    }

    #[test]
    fn test_set_content_recomputes_tags_only() {
        let mut entry = JournalEntry::new(march_first(), "old #one", 42);
        let id = entry.id;

        entry.set_content("new text #two #three");

        assert_eq!(entry.id, id);
        assert_eq!(entry.date, march_first());
        assert_eq!(entry.timestamp, 42);
        assert_eq!(entry.tags, vec!["two", "three"]);
    }

    #[test]
    fn test_serde_round_trip_preserves_all_fields() {
        let mut entry = JournalEntry::new(march_first(), "quiet evening #rest", 99);
        entry.mood = Some("calm".to_string());
        entry.has_image = Some(true);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"date\":\"2024-03-01\""));
        assert!(json.contains("\"hasImage\":true"));

        let parsed: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let json = format!(
            "{{\"id\":\"{}\",\"date\":\"2024-03-01\",\"content\":\"hi\",\"timestamp\":7}}",
            Uuid::new_v4()
        );
        let parsed: JournalEntry = serde_json::from_str(&json).unwrap();
        assert!(parsed.tags.is_empty());
        assert!(parsed.mood.is_none());
        assert!(parsed.has_image.is_none());
    }
}
