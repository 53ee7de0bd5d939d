//! shiftcal Core - Shift cycle classification, schedule views, and configuration
//!
//! This crate contains the domain logic and port definitions for shiftcal. The
//! only real computation lives in [`cycle`]; everything else shapes its results
//! for presentation or moves the anchor date in and out of storage.

pub mod config;
pub mod cycle;
pub mod dates;
pub mod error;
pub mod locale;
pub mod models;
pub mod ports;
pub mod schedule;
pub mod settings;

pub use cycle::{classify, classify_at, CycleClassifier};
pub use error::{Result, ShiftcalError};
pub use models::{AnchorDate, ColorToken, WorkState};
