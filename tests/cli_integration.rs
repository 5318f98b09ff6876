use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Helper function to set up a test Command instance pinned to its own
// data directory
fn set_up_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("goodthing").unwrap();
    cmd.env_clear()
        .env("HOME", data_dir.path())
        .env("GOODTHING_DIR", data_dir.path());
    cmd
}

#[test]
fn test_add_then_show() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "Saw a sunset", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded for 2024-03-01"));

    set_up_command(&data_dir)
        .args(["show", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saw a sunset"));
}

#[test]
fn test_show_missing_entry() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["show", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for 2024-03-01"));
}

#[test]
fn test_add_blank_content_fails() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "   ", "--date", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn test_add_duplicate_date_fails() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "first", "--date", "2024-03-01"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["add", "second", "--date", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_date_argument() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "hello", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_edit_and_delete_round_trip() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "rough draft", "--date", "2024-03-01"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["edit", "polished words", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 2024-03-01"));

    set_up_command(&data_dir)
        .args(["delete", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2024-03-01"));

    set_up_command(&data_dir)
        .args(["show", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for 2024-03-01"));
}

#[test]
fn test_calendar_renders_month_with_entry_marker() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "a good day", "--date", "2024-03-01"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["calendar", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("Su  Mo  Tu  We  Th  Fr  Sa"))
        .stdout(predicate::str::contains("1*"));

    // Month navigation from a rendered month.
    set_up_command(&data_dir)
        .args(["calendar", "--month", "2024-03", "--offset", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"));
}

#[test]
fn test_streak_counts_todays_entry() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["streak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 day streak"));

    set_up_command(&data_dir)
        .args(["add", "logged today"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["streak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day streak"));
}

#[test]
fn test_stats_output() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "counted", "--date", "2024-03-01"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 1"));
}

#[test]
fn test_search_by_text_and_tag() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "ran by the river #health", "--date", "2024-03-01"])
        .assert()
        .success();
    set_up_command(&data_dir)
        .args(["add", "quiet reading night", "--date", "2024-03-02"])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["search", "river"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ran by the river"))
        .stdout(predicate::str::contains("quiet reading").not());

    set_up_command(&data_dir)
        .args(["search", "--tag", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ran by the river"));

    set_up_command(&data_dir)
        .args(["search", "unmatched text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entries"));
}

#[test]
fn test_export_import_round_trip() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();
    let snapshot_path = source_dir.path().join("snapshot.json");

    set_up_command(&source_dir)
        .args(["add", "portable memory #travel", "--date", "2024-03-01"])
        .assert()
        .success();

    set_up_command(&source_dir)
        .args(["export", "--output"])
        .arg(&snapshot_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    set_up_command(&target_dir)
        .arg("import")
        .arg(&snapshot_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 entries"));

    set_up_command(&target_dir)
        .args(["show", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("portable memory"))
        .stdout(predicate::str::contains("travel"));
}

#[test]
fn test_import_malformed_snapshot_fails() {
    let data_dir = TempDir::new().unwrap();
    let snapshot_path = data_dir.path().join("broken.json");
    std::fs::write(&snapshot_path, "not json").unwrap();

    set_up_command(&data_dir)
        .arg("import")
        .arg(&snapshot_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_theme_preference_round_trip() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    set_up_command(&data_dir)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    set_up_command(&data_dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    set_up_command(&data_dir)
        .args(["theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme mode"));
}
