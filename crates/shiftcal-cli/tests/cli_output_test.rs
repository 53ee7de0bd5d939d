//! End-to-end tests for the shiftcal binary against a temporary home directory

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn shiftcal(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shiftcal"))
        .arg("--home")
        .arg(home)
        .args(args)
        .env_remove("SHIFTCAL_HOME")
        .env_remove("SHIFTCAL_LOCALE")
        .env_remove("SHIFTCAL_SUBJECT")
        .env_remove("SHIFTCAL_WEEK_START")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run shiftcal")
}

fn json(home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = shiftcal(home, &full);
    assert!(
        output.status.success(),
        "shiftcal {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not one JSON document");
    assert_eq!(value["status"], "success");
    value["data"].clone()
}

#[test]
fn test_set_then_show_anchor() {
    let home = TempDir::new().unwrap();

    let set = json(home.path(), &["anchor", "set", "2024-01-01"]);
    assert_eq!(set["configured"], true);
    assert_eq!(set["anchor"], "2024-01-01");

    let shown = json(home.path(), &["anchor", "show"]);
    assert_eq!(shown["anchor"], "2024-01-01");
    assert!(shown["stored_value"]
        .as_str()
        .unwrap()
        .starts_with("2024-01-01T00:00:00"));
}

#[test]
fn test_check_classifies_forward_and_backward() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let forward = json(home.path(), &["check", "2024-01-05"]);
    assert_eq!(forward["day"]["state"], "working_day");
    assert_eq!(forward["day"]["working"], true);

    let night = json(home.path(), &["check", "02.01.2024"]);
    assert_eq!(night["day"]["state"], "working_night");

    let backward = json(home.path(), &["check", "2023-12-31"]);
    assert_eq!(backward["day"]["state"], "free_day");
    assert_eq!(backward["day"]["color"], "green");
}

#[test]
fn test_status_on_date_lists_three_days() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let status = json(home.path(), &["status", "--on", "2024-01-01"]);
    let states: Vec<&str> = status["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["state"].as_str().unwrap())
        .collect();
    assert_eq!(states, vec!["working_day", "working_night", "resting_after_night"]);
}

#[test]
fn test_upcoming_respects_day_count() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let upcoming = json(home.path(), &["upcoming", "--from", "2024-01-01", "--days", "8"]);
    let days = upcoming["days"].as_array().unwrap();
    assert_eq!(days.len(), 8);
    assert_eq!(days[4]["state"], "working_day");
    assert_eq!(days[7]["date"], "2024-01-08");
}

#[test]
fn test_upcoming_rejects_zero_days() {
    let home = TempDir::new().unwrap();
    let output = shiftcal(home.path(), &["upcoming", "--days", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_calendar_json_has_grid_and_legend() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let calendar = json(home.path(), &["--locale", "en", "calendar", "--month", "2024-02"]);
    assert_eq!(calendar["month_name"], "February 2024");
    assert_eq!(calendar["legend"].as_array().unwrap().len(), 4);
    assert!(!calendar["grid"]["weeks"].as_array().unwrap().is_empty());
}

#[test]
fn test_too_early_anchor_is_rejected_and_store_untouched() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let output = shiftcal(home.path(), &["anchor", "set", "1999-12-31"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too early"));

    let shown = json(home.path(), &["anchor", "show"]);
    assert_eq!(shown["anchor"], "2024-01-01");
}

#[test]
fn test_invalid_date_is_rejected() {
    let home = TempDir::new().unwrap();

    let output = shiftcal(home.path(), &["anchor", "set", "someday"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid date"));
    assert!(!home.path().join("settings.json").exists());
}

#[test]
fn test_clear_removes_anchor() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let cleared = json(home.path(), &["anchor", "clear"]);
    assert_eq!(cleared["configured"], false);

    let shown = json(home.path(), &["anchor", "show"]);
    assert_eq!(shown["configured"], false);
    assert_eq!(shown["anchor"], Value::Null);
}

#[test]
fn test_dry_run_does_not_write() {
    let home = TempDir::new().unwrap();

    let planned = json(home.path(), &["--dry-run", "anchor", "set", "2024-01-01"]);
    assert_eq!(planned["dry_run"], true);
    assert_eq!(planned["planned_actions"][0]["action_type"], "write_setting");
    assert!(!home.path().join("settings.json").exists());
}

#[test]
fn test_unconfigured_status_is_not_an_error() {
    let home = TempDir::new().unwrap();

    let status = json(home.path(), &["status"]);
    assert_eq!(status["configured"], false);
    assert!(status["days"].as_array().unwrap().is_empty());

    let check = json(home.path(), &["check", "2024-01-01"]);
    assert_eq!(check["configured"], false);
    assert_eq!(check["day"], Value::Null);
}

#[test]
fn test_config_reports_sources() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "subject = \"Alex\"\n").unwrap();

    let config = json(home.path(), &["--locale", "en", "config"]);
    assert_eq!(config["locale"]["value"], "en");
    assert_eq!(config["locale"]["source"], "Cli");
    assert_eq!(config["subject"]["value"], "Alex");
    assert_eq!(config["subject"]["source"], "File");
    assert_eq!(config["week_start"]["source"], "Default");
}

#[test]
fn test_human_status_uses_configured_subject() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["anchor", "set", "2024-01-01"]);

    let output = shiftcal(
        home.path(),
        &["--locale", "en", "--subject", "Alex", "status", "--on", "2024-01-01"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Is Alex working ... ?"));
    assert!(stdout.contains("Working day shift"));
}

#[test]
fn test_interactive_prompt_keeps_stdout_clean() {
    let home = TempDir::new().unwrap();

    // Prompt text goes to stderr, so stdout holds at most one JSON document
    let output = shiftcal(home.path(), &["--json", "anchor", "set", "--interactive"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Когда работает"), "stdout: {}", stdout);
    if !stdout.trim().is_empty() {
        serde_json::from_str::<Value>(&stdout).expect("stdout is not one JSON document");
    }
}

#[test]
fn test_malformed_settings_error_is_not_repeated() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("settings.json"), "{ not json").unwrap();

    let output = shiftcal(home.path(), &["anchor", "show"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not read stored settings"));
    assert_eq!(stderr.matches("Failed to parse").count(), 1);
}
