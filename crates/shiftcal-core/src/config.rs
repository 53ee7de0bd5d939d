use crate::error::{Result, ShiftcalError};
use crate::locale::Locale;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for shiftcal
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub locale: ConfigValue<Locale>,
    /// Name shown in the title; `None` falls back to the locale default
    pub subject: ConfigValue<Option<String>>,
    /// First column of the month grid
    pub week_start: ConfigValue<Weekday>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            locale: ConfigValue::new(Locale::Ru, ConfigSource::Default),
            subject: ConfigValue::new(None, ConfigSource::Default),
            week_start: ConfigValue::new(Weekday::Mon, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file. A missing file leaves the values untouched.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(self);
        }

        let content = fs::read_to_string(path).map_err(|e| ShiftcalError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| ShiftcalError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(locale) = file_config.locale {
            self.locale.update(parse_locale(&locale)?, ConfigSource::File);
        }

        if let Some(subject) = file_config.subject {
            self.subject.update(non_empty(subject), ConfigSource::File);
        }

        if let Some(week_start) = file_config.week_start {
            self.week_start.update(parse_week_start(&week_start)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // SHIFTCAL_LOCALE
        if let Ok(locale_str) = env::var("SHIFTCAL_LOCALE") {
            match parse_locale(&locale_str) {
                Ok(locale) => self.locale.update(locale, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid SHIFTCAL_LOCALE value '{}': expected ru or en",
                    locale_str
                ),
            }
        }

        // SHIFTCAL_SUBJECT
        if let Ok(subject) = env::var("SHIFTCAL_SUBJECT") {
            self.subject.update(non_empty(subject), ConfigSource::Environment);
        }

        // SHIFTCAL_WEEK_START
        if let Ok(week_start_str) = env::var("SHIFTCAL_WEEK_START") {
            match parse_week_start(&week_start_str) {
                Ok(week_start) => self.week_start.update(week_start, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid SHIFTCAL_WEEK_START value '{}': expected a weekday such as monday",
                    week_start_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(locale) = overrides.locale {
            self.locale.update(locale, ConfigSource::Cli);
        }

        if let Some(subject) = overrides.subject {
            self.subject.update(non_empty(subject), ConfigSource::Cli);
        }
    }

    /// Subject name to display, falling back to the locale default
    pub fn subject_name(&self) -> String {
        self.subject
            .value
            .clone()
            .unwrap_or_else(|| self.locale.value.default_subject().to_string())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("locale".to_string(), (self.locale.value.to_string(), self.locale.source));

        map.insert("subject".to_string(), (self.subject_name(), self.subject.source));

        map.insert(
            "week_start".to_string(),
            (format!("{:?}", self.week_start.value), self.week_start.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    locale: Option<String>,
    subject: Option<String>,
    week_start: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub locale: Option<Locale>,
    pub subject: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse locale from string
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.trim().to_lowercase().as_str() {
        "ru" | "russian" => Ok(Locale::Ru),
        "en" | "english" => Ok(Locale::En),
        _ => Err(ShiftcalError::ConfigInvalid {
            key: "locale".to_string(),
            reason: format!("Invalid locale: {}. Use ru or en", s),
        }),
    }
}

/// Parse the first weekday of the month grid
pub fn parse_week_start(s: &str) -> Result<Weekday> {
    s.trim().parse::<Weekday>().map_err(|_| ShiftcalError::ConfigInvalid {
        key: "week_start".to_string(),
        reason: format!("Invalid weekday: {}. Use monday, sunday, etc.", s),
    })
}
