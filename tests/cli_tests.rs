use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomotimer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomotimer").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("POMOTIMER_LOG_FILE")
        .env_remove("POMOTIMER_CONFIG")
        .env_remove("POMOTIMER_LOG");
    cmd
}

fn write_log(home: &TempDir, contents: &str) {
    let dir = home.path().join(".pomotimer");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("sessions.csv"), contents).unwrap();
}

#[test]
fn stats_without_log_reports_no_data() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log file not found."));
}

#[test]
fn stats_with_empty_log_reports_no_sessions() {
    let home = TempDir::new().unwrap();
    write_log(&home, "");
    pomotimer(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet."));
}

#[test]
fn stats_json_sums_by_kind() {
    let home = TempDir::new().unwrap();
    write_log(
        &home,
        "Work,2026-10-19 09:00:00,25.0\n\
         Break,2026-10-19 09:25:00,5.0\n\
         Work,2026-10-19 09:30:00,25.5\n",
    );

    let output = pomotimer(&home)
        .args(["stats", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["totals"]["Work"], 50.5);
    assert_eq!(value["totals"]["Break"], 5.0);
    assert_eq!(value["sessions"], 3);
    assert_eq!(value["skipped_lines"], 0);
}

#[test]
fn stats_skips_malformed_lines() {
    let home = TempDir::new().unwrap();
    write_log(
        &home,
        "Work,2026-10-19 09:00:00,25\n\
         half a line\n\
         Break,2026-10-19 09:25:00,5\n",
    );

    pomotimer(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("25.0 min"))
        .stdout(predicate::str::contains("Skipped 1 unreadable log line(s)"));
}

#[test]
fn log_file_flag_overrides_default() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.csv");
    std::fs::write(&custom, "Break,2026-10-19 09:25:00,7\n").unwrap();

    pomotimer(&home)
        .args(["stats", "--output", "json", "--log-file"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Break\": 7.0"));
}

#[test]
fn history_lists_newest_first() {
    let home = TempDir::new().unwrap();
    write_log(
        &home,
        "Work,2026-10-19 09:00:00,25\n\
         Break,2026-10-19 09:25:00,5\n\
         Work,2026-10-19 09:30:00,25\n",
    );

    let output = pomotimer(&home)
        .args(["history", "--limit", "2", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["started_at"], "2026-10-19 09:30:00");
    assert_eq!(value["items"][1]["kind"], "Break");
}

#[test]
fn history_without_log_is_empty() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent sessions (0)"));
}

#[test]
fn config_set_and_show() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .args(["config", "set", "--work", "50", "--break", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50 min work / 10 min break"));

    pomotimer(&home)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 50"))
        .stdout(predicate::str::contains("\"break_minutes\": 10"));
}

#[test]
fn config_set_rejects_zero() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .args(["config", "set", "--work", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    assert!(!home.path().join(".pomotimer").join("config.yaml").exists());
}

#[test]
fn invalid_config_file_is_an_error() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pomotimer");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "timer:\n  break_minutes: 0\n").unwrap();

    pomotimer(&home)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn non_integer_duration_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .args(["run", "--work", "abc"])
        .assert()
        .failure();
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    pomotimer(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomotimer"));
}
