//! Error types for shiftcal

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShiftcalError {
    // Classification errors
    #[error("Internal error: no work state for cycle index {index}")]
    StateNotFound { index: usize },

    // Date input errors
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Anchor date {date} is before the earliest supported date {min}")]
    AnchorTooEarly { date: NaiveDate, min: NaiveDate },

    // Settings errors
    #[error("Stored value for '{key}' is corrupt ({value:?}): {reason}")]
    SettingsCorrupt {
        key: String,
        value: String,
        reason: String,
    },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ShiftcalError>;
