use chrono::NaiveDate;
use console::style;
use shiftcal_core::ShiftcalError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a date the user typed that could not be parsed
pub fn invalid_date(input: &str, reason: &str) -> CliError {
    CliError::new("Invalid date")
        .with_context(format!("Could not read '{}' as a date.\n\nReason: {}", input, reason))
        .with_suggestion("Use ISO format: 2024-01-01")
        .with_suggestion("Or day.month.year: 01.01.2024")
        .with_suggestion("Or a keyword: today, tomorrow, yesterday")
}

/// Create error for an anchor date before the supported range
pub fn anchor_too_early(date: NaiveDate, min: NaiveDate) -> CliError {
    CliError::new("Day-shift date is too early")
        .with_context(format!(
            "The day-shift date {} is before {}.\n\nThe stored date was not changed.",
            date, min
        ))
        .with_suggestion("Pick any recent day shift; the cycle repeats every four days")
        .with_help("Run: shiftcal anchor set --help")
}

/// Create error for an unreadable stored anchor
pub fn settings_corrupt(key: &str, value: &str) -> CliError {
    CliError::new("Stored settings are corrupt")
        .with_context(format!(
            "The value stored under '{}' is not a date.\n\nValue: {:?}",
            key, value
        ))
        .with_suggestion("Set the date again: shiftcal anchor set 2024-01-01")
        .with_suggestion("Or remove it: shiftcal anchor clear")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check config.toml in the shiftcal home directory for syntax errors")
        .with_suggestion("Supported keys: locale, subject, week_start")
        .with_help("Run: shiftcal config")
}

/// Create error for a broken cycle lookup
pub fn internal_state_error(index: usize) -> CliError {
    CliError::new("Internal error while computing the schedule")
        .with_context(format!(
            "No work state exists for cycle index {}.\n\nThis is a bug in shiftcal, not a problem with your input.",
            index
        ))
}

/// Create error for a failed read or write under the shiftcal home directory
fn file_access_failed(error: &anyhow::Error) -> CliError {
    CliError::new("Could not access shiftcal files")
        .with_context(format!("Error: {:#}", error))
        .with_suggestion("Check permissions of the shiftcal home directory")
        .with_suggestion("Or point --home at a writable directory")
}

/// Create error for a settings file that is not valid JSON
fn settings_unreadable(error: &anyhow::Error) -> CliError {
    CliError::new("Could not read stored settings")
        .with_context(format!("Error: {:#}", error))
        .with_suggestion("Fix or delete settings.json in the shiftcal home directory")
        .with_suggestion("Then set the date again: shiftcal anchor set 2024-01-01")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(error) => error,
    };

    if let Some(core_error) = error.chain().find_map(|e| e.downcast_ref::<ShiftcalError>()) {
        return match core_error {
            ShiftcalError::InvalidDate { input, reason } => invalid_date(input, reason),
            ShiftcalError::AnchorTooEarly { date, min } => anchor_too_early(*date, *min),
            ShiftcalError::SettingsCorrupt { key, value, .. } => settings_corrupt(key, value),
            ShiftcalError::ConfigInvalid { key, reason } => invalid_config(key, reason),
            ShiftcalError::StateNotFound { index } => internal_state_error(*index),
            ShiftcalError::Io(_) => file_access_failed(&error),
            ShiftcalError::Serialization(_) => settings_unreadable(&error),
        };
    }

    let message = format!("{:#}", error);
    if message.contains("permission denied") || message.contains("Permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check permissions of the shiftcal home directory")
            .with_suggestion("Or point --home at a writable directory")
    } else {
        CliError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_get_suggestions() {
        let error = anyhow::Error::new(ShiftcalError::InvalidDate {
            input: "someday".to_string(),
            reason: "nope".to_string(),
        });
        let cli_error = from_anyhow(error);
        assert_eq!(cli_error.message, "Invalid date");
        assert!(!cli_error.suggestions.is_empty());
    }

    #[test]
    fn test_context_wrapped_core_error_is_found() {
        let error = anyhow::Error::new(ShiftcalError::StateNotFound { index: 9 })
            .context("Failed to classify");
        let cli_error = from_anyhow(error);
        assert!(cli_error.context.unwrap().contains('9'));
    }

    #[test]
    fn test_unreadable_settings_are_reported_once() {
        let error = anyhow::Error::new(ShiftcalError::Serialization(
            "Failed to parse settings.json: expected value".to_string(),
        ))
        .context("Failed to read settings");
        let cli_error = from_anyhow(error);

        assert_eq!(cli_error.message, "Could not read stored settings");
        let context = cli_error.context.unwrap();
        assert_eq!(context.matches("expected value").count(), 1);
        assert!(context.contains("Failed to read settings"));
        assert!(!cli_error.suggestions.is_empty());
    }

    #[test]
    fn test_io_error_gets_short_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let cli_error = from_anyhow(anyhow::Error::new(ShiftcalError::Io(io)));

        assert_eq!(cli_error.message, "Could not access shiftcal files");
        assert_eq!(cli_error.context.unwrap().matches("denied").count(), 1);
    }

    #[test]
    fn test_cli_error_passes_through() {
        let error = anyhow::Error::new(CliError::new("custom").with_suggestion("do this"));
        let cli_error = from_anyhow(error);
        assert_eq!(cli_error.message, "custom");
        assert_eq!(cli_error.suggestions, vec!["do this".to_string()]);
    }
}
