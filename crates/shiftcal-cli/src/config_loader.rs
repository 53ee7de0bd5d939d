//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use shiftcal_core::config::{CliConfigOverrides, LayeredConfig};
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the shiftcal home directory: --home, $SHIFTCAL_HOME, ~/.shiftcal, ./.shiftcal
pub fn resolve_home(cli_home: Option<PathBuf>) -> PathBuf {
    if let Some(home) = cli_home {
        return home;
    }

    if let Ok(home) = env::var("SHIFTCAL_HOME") {
        if !home.trim().is_empty() {
            return PathBuf::from(home);
        }
    }

    match env::var_os("HOME") {
        Some(user_home) => PathBuf::from(user_home).join(".shiftcal"),
        None => PathBuf::from(".shiftcal"),
    }
}

/// Load layered configuration for a home directory with CLI overrides
pub fn load_config(home: &Path, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let config_path = home.join(CONFIG_FILE_NAME);

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(&config_path)
        .context("Failed to load configuration file")?
        .load_from_env();
    config.update_from_cli(overrides);

    tracing::debug!(
        home = %home.display(),
        locale = %config.locale.value,
        "Configuration loaded"
    );
    Ok(config)
}
