use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ── Fixture helpers ────────────────────────────────────────────────────────

/// Create a temporary directory with a minimal board export.
///
/// Relative to a reference date of 2025-06-10:
///   - 2 tasks completed on 2025-06-09, 1 on 2025-06-10 (current streak 2)
///   - 1 open task due 2025-06-20 (due stream)
///   - 1 open task due 2025-06-01 and 1 due 2025-06-10 (overdue stream)
fn create_fixture_dir() -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");

    let board = r#"[
        {
            "project": "Website",
            "section": "Sprint 12",
            "name": "Fix login redirect",
            "assignees": ["ada"],
            "completed": true,
            "completedOn": "2025-06-09"
        },
        {
            "project": "Website",
            "section": "Sprint 12",
            "name": "Update footer links",
            "completed": true,
            "completedOn": "2025-06-09"
        },
        {
            "project": "Website",
            "section": "Sprint 12",
            "name": "Ship dark mode",
            "completed": true,
            "completedOn": "2025-06-10"
        },
        {
            "project": "Website",
            "section": "Backlog",
            "name": "Migrate CDN",
            "assignees": ["grace"],
            "dueDate": "2025-06-20",
            "completed": false
        },
        {
            "project": "Ops",
            "section": "Urgent",
            "name": "Rotate API keys",
            "dueDate": "2025-06-01",
            "completed": false
        },
        {
            "project": "Ops",
            "section": "Urgent",
            "name": "Renew certificate",
            "dueDate": "2025-06-10",
            "completed": false
        }
    ]"#;
    fs::write(tmp.path().join("board.json"), board).unwrap();

    tmp
}

fn create_empty_fixture_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

// ── Help and version ───────────────────────────────────────────────────────

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task activity dashboard"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vantageflow"));
}

#[test]
fn test_stats_command_help() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("stats")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show activity summary"));
}

#[test]
fn test_grid_command_help() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("grid")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a calendar grid window"));
}

#[test]
fn test_report_command_help() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("report")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export the activity report"));
}

#[test]
fn test_tui_command_help() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("tui")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch the interactive dashboard"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("invalid-command").assert().failure();
}

#[test]
fn test_invalid_today_value() {
    let tmp = create_empty_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("stats")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("June 10th")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --today"));
}

// ── Stats ──────────────────────────────────────────────────────────────────

#[test]
fn test_stats_table_output() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("stats")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak"))
        .stdout(predicate::str::contains("2 days"))
        .stdout(predicate::str::contains("Overdue"));
}

#[test]
fn test_stats_json_output() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("stats")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["currentStreak"], 2);
    assert_eq!(json["longestStreak"], 2);
    assert_eq!(json["activeDays"], 2);
    assert_eq!(json["maxInSingleDay"], 2);
    assert_eq!(json["openDue"], 1);
    // Due exactly today and still open counts as overdue.
    assert_eq!(json["openOverdue"], 2);
}

#[test]
fn test_stats_empty_dir() {
    let tmp = create_empty_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("stats")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total"], 0);
    assert_eq!(json["currentStreak"], 0);
}

#[test]
fn test_stats_skips_malformed_export() {
    let tmp = create_fixture_dir();
    fs::write(tmp.path().join("broken.json"), "{not json").unwrap();

    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("stats")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total"], 3);
}

// ── Grid ───────────────────────────────────────────────────────────────────

#[test]
fn test_grid_month_json() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("grid")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--mode")
        .arg("month")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["mode"], "month");
    assert_eq!(json["start"], "2025-06-01");
    assert_eq!(json["end"], "2025-06-30");

    // June 2025 opens on a Sunday: no lead padding, 5 full weeks.
    let weeks = json["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0][0]["date"], "2025-06-01");

    let cells: Vec<&serde_json::Value> =
        weeks.iter().flat_map(|w| w.as_array().unwrap()).collect();

    let today_cell = cells
        .iter()
        .find(|c| c["date"] == "2025-06-10")
        .unwrap();
    assert_eq!(today_cell["isToday"], true);
    assert_eq!(today_cell["activity"], 1);
    assert_eq!(today_cell["overdue"], 1);
    assert_eq!(today_cell["due"], 0);

    let due_cell = cells
        .iter()
        .find(|c| c["date"] == "2025-06-20")
        .unwrap();
    assert_eq!(due_cell["isFuture"], true);
    assert_eq!(due_cell["due"], 1);
    assert_eq!(due_cell["activity"], 0);
}

#[test]
fn test_grid_week_offset() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("grid")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--mode")
        .arg("week")
        .arg("--offset")
        .arg("-1")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    // 2025-06-10 is a Tuesday; one week back runs Sun 06-01 to Sat 06-07.
    assert_eq!(json["start"], "2025-06-01");
    assert_eq!(json["end"], "2025-06-07");
    assert_eq!(json["weeks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_grid_custom_range() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("grid")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--mode")
        .arg("range")
        .arg("--since")
        .arg("2025-06-08")
        .arg("--until")
        .arg("2025-06-10")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["mode"], "range");
    let weeks = json["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 1);
    let in_range = weeks[0]
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["inRange"] == true)
        .count();
    assert_eq!(in_range, 3);
}

#[test]
fn test_grid_range_requires_bounds() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("grid")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--mode")
        .arg("range")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--since"));
}

#[test]
fn test_grid_invalid_mode() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("grid")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--mode")
        .arg("decade")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --mode"));
}

// ── Report ─────────────────────────────────────────────────────────────────

#[test]
fn test_report_stdout() {
    let tmp = create_fixture_dir();
    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    let output = cmd
        .arg("report")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["stats"]["total"], 3);
    assert_eq!(json["meta"]["dateRangeStart"], "2025-06-09");
    assert_eq!(json["meta"]["dateRangeEnd"], "2025-06-10");
    assert_eq!(json["days"].as_array().unwrap().len(), 2);
    assert!(json["meta"]["version"].is_string());
}

#[test]
fn test_report_to_file() {
    let tmp = create_fixture_dir();
    let out_path = tmp.path().join("report.json");

    let mut cmd = Command::cargo_bin("vantageflow").unwrap();
    cmd.arg("report")
        .arg("--dir")
        .arg(tmp.path())
        .arg("--today")
        .arg("2025-06-10")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written"));

    let content = fs::read_to_string(&out_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["stats"]["currentStreak"], 2);
}
