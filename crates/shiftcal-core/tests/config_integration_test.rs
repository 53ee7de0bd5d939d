//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use chrono::Weekday;
use serial_test::serial;
use shiftcal_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use shiftcal_core::locale::Locale;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var("SHIFTCAL_LOCALE");
    env::remove_var("SHIFTCAL_SUBJECT");
    env::remove_var("SHIFTCAL_WEEK_START");
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "locale = \"ru\"\nsubject = \"мама\"\n");

    env::set_var("SHIFTCAL_LOCALE", "en");

    let config = LayeredConfig::with_defaults()
        .load_from_file(&path)
        .unwrap()
        .load_from_env();

    assert_eq!(config.locale.value, Locale::En);
    assert_eq!(config.locale.source, ConfigSource::Environment);
    // Subject was only set in the file
    assert_eq!(config.subject_name(), "мама");
    assert_eq!(config.subject.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var("SHIFTCAL_SUBJECT", "Sam");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        locale: None,
        subject: Some("Alex".to_string()),
    });

    assert_eq!(config.subject_name(), "Alex");
    assert_eq!(config.subject.source, ConfigSource::Cli);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("SHIFTCAL_LOCALE", "klingon");
    env::set_var("SHIFTCAL_WEEK_START", "someday");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.locale.value, Locale::Ru);
    assert_eq!(config.locale.source, ConfigSource::Default);
    assert_eq!(config.week_start.value, Weekday::Mon);
    assert_eq!(config.week_start.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_env_week_start() {
    clear_env();
    env::set_var("SHIFTCAL_WEEK_START", "sunday");

    let config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.week_start.value, Weekday::Sun);
    assert_eq!(config.week_start.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_malformed_toml_is_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "locale = \n");

    assert!(LayeredConfig::with_defaults().load_from_file(&path).is_err());
}
