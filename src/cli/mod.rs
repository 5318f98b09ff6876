//! Command-line interface for the goodthing application.
//!
//! The CLI is the presentation collaborator around the core: every
//! subcommand maps onto an entry-store operation or a calendar query, and
//! all date arguments accept the YYYY-MM-DD and YYYYMMDD formats.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A gratitude journal that records one good thing per day
#[derive(Parser, Debug)]
#[command(name = "goodthing")]
#[command(about = "A gratitude journal that records one good thing per day")]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text")]
    pub log_format: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record one good thing for a day
    Add {
        /// The entry text; #tags are extracted from it
        text: String,

        /// Day the entry belongs to (YYYY-MM-DD or YYYYMMDD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the entry for a day
    Show {
        /// Day to show (default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Replace the text of an existing entry
    Edit {
        /// The new entry text
        text: String,

        /// Day whose entry to edit (default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the entry for a day
    Delete {
        /// Day whose entry to delete (default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Render the month calendar with entry markers
    Calendar {
        /// Month to render (YYYY-MM, default the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Navigate this many months from the rendered month (-1 = previous)
        #[arg(short, long, allow_negative_numbers = true, default_value_t = 0)]
        offset: i32,

        /// Day to highlight as selected (YYYY-MM-DD or YYYYMMDD)
        #[arg(short, long)]
        selected: Option<String>,
    },

    /// Print the current consecutive-day streak
    Streak,

    /// Print journal statistics
    Stats,

    /// Search entries by content text and/or tag
    Search {
        /// Substring to match against entry content
        #[arg(default_value = "")]
        text: String,

        /// Only entries carrying this tag (without the # marker)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Write a JSON snapshot of all entries
    Export {
        /// Destination file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all entries with the contents of a JSON snapshot
    Import {
        /// Snapshot file to read
        file: PathBuf,
    },

    /// Show or set the dark-mode preference
    Theme {
        /// "dark" or "light"; omit to show the current setting
        mode: Option<String>,
    },
}

/// Parse a date argument in YYYY-MM-DD or YYYYMMDD format
pub fn parse_date_arg(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT_COMPACT))
}

/// Parse a month argument in YYYY-MM format, yielding the first of the month
pub fn parse_month_arg(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), DATE_FORMAT_ISO)
}
