//! shiftcal Store - Settings storage adapters
//!
//! This crate provides adapter implementations of the
//! [`SettingsStore`](shiftcal_core::ports::SettingsStore) port.

pub mod file;
pub mod memory;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;
pub use shiftcal_core::ports::SettingsStore;
