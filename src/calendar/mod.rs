//! Calendar and streak computations without I/O.
//!
//! This module contains pure logic over the journal collection: the month
//! grid used by the calendar view, month navigation, the consecutive-day
//! streak and entry counts. Every function is a pure function of
//! `(today's date, the entry collection, the reference/selected dates)` and
//! must be recomputed whenever the collection changes.

use crate::constants::STREAK_LOOKBACK_DAYS;
use crate::entry::JournalEntry;
use chrono::{Datelike, Duration, Months, NaiveDate};

/// One day of a rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar day this cell represents.
    pub date: NaiveDate,
    /// Whether this cell is today.
    pub is_today: bool,
    /// Whether this cell is the currently selected day.
    pub is_selected: bool,
    /// Whether the collection holds an entry for this day.
    pub has_entry: bool,
}

/// A month of day-cells plus the padding needed to align the first day to
/// its weekday column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Cells for every day of the month, in ascending date order.
    pub days: Vec<DayCell>,
    /// Blank cells before the first day; weekday columns run Sunday = 0
    /// through Saturday = 6.
    pub leading_blanks: u32,
}

/// First and last calendar day of the month containing `reference`.
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = reference.with_day(1).expect("day 1 exists in every month");
    let last = first + Months::new(1) - Duration::days(1);
    (first, last)
}

/// Builds the grid of day-cells for the month containing `reference`.
///
/// Each cell carries its date and the today/selected/has-entry flags; the
/// grid also reports how many leading blanks pad the first day to its
/// weekday column.
///
/// # Examples
///
/// ```
/// use goodthing::calendar::month_grid;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// let grid = month_grid(&[], reference, reference, None);
/// assert_eq!(grid.days.len(), 30);
/// assert_eq!(grid.leading_blanks, 4); // June 2023 starts on a Thursday
/// ```
pub fn month_grid(
    entries: &[JournalEntry],
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> MonthGrid {
    let (first, last) = month_bounds(reference);

    let days = first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| DayCell {
            date,
            is_today: date == today,
            is_selected: selected == Some(date),
            has_entry: has_entry_on(entries, date),
        })
        .collect();

    MonthGrid {
        days,
        leading_blanks: first.weekday().num_days_from_sunday(),
    }
}

/// The date `delta` months away from `reference`, keeping the same
/// day-of-month where it exists and clamping to the end of shorter months
/// (Jan 31 + 1 month is Feb 28 or 29).
///
/// Navigation past the supported date range saturates to `reference`.
pub fn advance_month(reference: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        reference.checked_add_months(Months::new(delta as u32))
    } else {
        reference.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(reference)
}

/// Counts consecutive days with an entry, ending at `today` inclusive.
///
/// Walks backward one day at a time and stops at the first day without an
/// entry, or after the 365-day lookback bound. No entry for today means a
/// streak of 0.
pub fn current_streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if has_entry_on(entries, day) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Number of entries dated in the same month and year as `reference`.
pub fn count_in_month(entries: &[JournalEntry], reference: NaiveDate) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry.date.year() == reference.year() && entry.date.month() == reference.month()
        })
        .count()
}

/// Size of the full entry collection.
pub fn total_count(entries: &[JournalEntry]) -> usize {
    entries.len()
}

fn has_entry_on(entries: &[JournalEntry], date: NaiveDate) -> bool {
    entries.iter().any(|entry| entry.date == date)
}
