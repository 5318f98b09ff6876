/*!
# Goodthing - a one-entry-per-day gratitude journal

Command-line front end for the goodthing journal core. Each subcommand maps
onto an entry-store operation or a calendar query and prints the result as
text; all durable state lives as JSON files in the configured data
directory.

## Usage

```text
goodthing add "Saw a sunset #joy" [--date 2024-03-01]
goodthing show [--date 2024-03-01]
goodthing edit "Better words" [--date 2024-03-01]
goodthing delete [--date 2024-03-01]
goodthing calendar [--month 2024-03] [--offset -1] [--selected 2024-03-15]
goodthing streak
goodthing stats
goodthing search sunset [--tag joy]
goodthing export [--output snapshot.json]
goodthing import snapshot.json
goodthing theme [dark|light]
```

## Configuration

- `GOODTHING_DIR`: directory for journal data (defaults to ~/.goodthing)
- `RUST_LOG`: tracing filter override
*/

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use goodthing::calendar::{self, MonthGrid};
use goodthing::cli::{self, CliArgs, Command};
use goodthing::config::Config;
use goodthing::constants::DAYS_PER_WEEK;
use goodthing::errors::{AppError, AppResult};
use goodthing::logging;
use goodthing::prefs;
use goodthing::storage::{ensure_data_directory_exists, FileStorage, StorageBackend};
use goodthing::store::EntryStore;
use std::fs;
use tracing::{debug, info};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let args = CliArgs::parse();
    logging::init_logging(&args.log_format, args.verbose)?;

    info!("starting goodthing");
    let today = Local::now().date_naive();

    let config = Config::load()?;
    config.validate()?;
    debug!("configuration loaded and validated");

    ensure_data_directory_exists(&config.data_dir)?;
    let storage = FileStorage::new(&config.data_dir);

    match args.command {
        // The theme preference lives beside the store, not inside it.
        Command::Theme { mode } => handle_theme(&storage, mode.as_deref()),
        command => {
            let mut store = EntryStore::open(storage)?;
            dispatch(&mut store, command, today)
        }
    }
}

fn dispatch<S: StorageBackend>(
    store: &mut EntryStore<S>,
    command: Command,
    today: NaiveDate,
) -> AppResult<()> {
    match command {
        Command::Add { text, date } => {
            let date = resolve_date(date.as_deref(), today)?;
            let entry = store.add(date, &text)?;
            println!("Recorded for {}: {}", entry.date, entry.content);
            if !entry.tags.is_empty() {
                println!("Tags: {}", entry.tags.join(", "));
            }
        }

        Command::Show { date } => {
            let date = resolve_date(date.as_deref(), today)?;
            match store.find_by_date(date) {
                Some(entry) => {
                    println!("{}  {}", entry.date, entry.content);
                    if !entry.tags.is_empty() {
                        println!("Tags: {}", entry.tags.join(", "));
                    }
                }
                None => println!("No entry for {}.", date),
            }
        }

        Command::Edit { text, date } => {
            let date = resolve_date(date.as_deref(), today)?;
            match store.find_by_date(date).map(|entry| entry.id) {
                Some(id) => {
                    let entry = store.update(id, &text)?;
                    println!("Updated {}: {}", entry.date, entry.content);
                }
                None => println!("No entry for {} yet. Use `goodthing add` to create one.", date),
            }
        }

        Command::Delete { date } => {
            let date = resolve_date(date.as_deref(), today)?;
            match store.find_by_date(date).map(|entry| entry.id) {
                Some(id) => {
                    let removed = store.remove(id)?;
                    println!("Deleted entry for {}.", removed.date);
                }
                None => println!("No entry for {}.", date),
            }
        }

        Command::Calendar {
            month,
            offset,
            selected,
        } => {
            let base = match month {
                Some(raw) => cli::parse_month_arg(&raw)
                    .map_err(|e| AppError::InvalidDate(format!("{}: {}", raw, e)))?,
                None => today,
            };
            let reference = calendar::advance_month(base, offset);
            let selected = match selected {
                Some(raw) => Some(
                    cli::parse_date_arg(&raw)
                        .map_err(|e| AppError::InvalidDate(format!("{}: {}", raw, e)))?,
                ),
                None => None,
            };
            let grid = calendar::month_grid(store.entries(), reference, today, selected);
            print!("{}", render_calendar(&grid, reference));
        }

        Command::Streak => {
            println!(
                "{} day streak",
                calendar::current_streak(store.entries(), today)
            );
        }

        Command::Stats => {
            let entries = store.entries();
            println!("Total entries: {}", calendar::total_count(entries));
            println!(
                "This month: {}",
                calendar::count_in_month(entries, today)
            );
            println!(
                "Current streak: {} days",
                calendar::current_streak(entries, today)
            );
        }

        Command::Search { text, tag } => {
            let results = match tag {
                Some(tag) => {
                    let mut hits = store.find_by_tag(&tag);
                    if !text.is_empty() {
                        let needle = text.to_lowercase();
                        hits.retain(|entry| entry.content.to_lowercase().contains(&needle));
                    }
                    hits
                }
                None => store.search(&text),
            };
            if results.is_empty() {
                println!("No matching entries.");
            }
            for entry in results {
                println!("{}  {}", entry.date, entry.content);
            }
        }

        Command::Export { output } => {
            let snapshot = store.export_all()?;
            match output {
                Some(path) => {
                    fs::write(&path, &snapshot)?;
                    info!(count = store.total_count(), "snapshot exported");
                    println!(
                        "Exported {} entries to {}.",
                        store.total_count(),
                        path.display()
                    );
                }
                None => println!("{}", snapshot),
            }
        }

        Command::Import { file } => {
            let raw = fs::read_to_string(&file)?;
            store.import_all(&raw)?;
            println!("Imported {} entries.", store.total_count());
        }

        // Handled before the store is opened.
        Command::Theme { .. } => {}
    }
    Ok(())
}

fn handle_theme<S: StorageBackend>(storage: &S, mode: Option<&str>) -> AppResult<()> {
    match mode {
        None => {
            let dark = prefs::load_dark_mode(storage)?;
            println!("Theme: {}", if dark { "dark" } else { "light" });
        }
        Some("dark") => {
            prefs::save_dark_mode(storage, true)?;
            println!("Theme set to dark.");
        }
        Some("light") => {
            prefs::save_dark_mode(storage, false)?;
            println!("Theme set to light.");
        }
        Some(other) => {
            return Err(AppError::Config(format!(
                "Unknown theme mode: {} (expected dark or light)",
                other
            )))
        }
    }
    Ok(())
}

fn resolve_date(raw: Option<&str>, today: NaiveDate) -> AppResult<NaiveDate> {
    match raw {
        Some(text) => {
            cli::parse_date_arg(text).map_err(|e| AppError::InvalidDate(format!("{}: {}", text, e)))
        }
        None => Ok(today),
    }
}

/// Renders a month grid as rows of day cells.
///
/// `>` marks today, `+` marks the selected day and `*` marks a day with an
/// entry.
fn render_calendar(grid: &MonthGrid, reference: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", reference.format("%B %Y")));
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        out.push_str("    ");
        column += 1;
    }
    for cell in &grid.days {
        let prefix = if cell.is_today {
            ">"
        } else if cell.is_selected {
            "+"
        } else {
            ""
        };
        let label = format!("{}{}", prefix, cell.date.day());
        out.push_str(&format!("{:>3}", label));
        out.push(if cell.has_entry { '*' } else { ' ' });
        column += 1;
        if column == DAYS_PER_WEEK {
            out.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        out.push('\n');
    }
    out.push_str("> today  + selected  * has entry\n");
    out
}
