use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn roster() -> Command {
    let mut cmd = Command::cargo_bin("roster").expect("roster binary");
    cmd.env_remove("ROSTER_DATABASE").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_describes_flags() {
    roster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_is_printed() {
    roster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_file_fails() {
    roster()
        .args(["--config", "/nonexistent/roster.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn malformed_config_file_fails_with_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "database = \n").unwrap();

    roster()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn invalid_log_format_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    roster()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn unopenable_database_fails_with_diagnostic() {
    roster()
        .args(["--database", "/nonexistent/dir/roster.db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open database"));
}

#[test]
fn non_interactive_stdin_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    roster()
        .arg("--database")
        .arg(&db)
        .write_stdin("")
        .assert()
        .failure();

    assert!(db.exists(), "database is created before the menu starts");
}

#[test]
fn json_mode_writes_one_json_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    let output = roster()
        .arg("--json")
        .arg("--database")
        .arg(&db)
        .write_stdin("")
        .output()
        .expect("run roster");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect();

    assert_eq!(lines[0]["type"], "header");
    assert_eq!(lines[0]["payload"]["app"], "roster");
    assert_eq!(lines[0]["payload"]["version"], env!("CARGO_PKG_VERSION"));
}
