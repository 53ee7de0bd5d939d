//! In-memory settings store for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For anything that must survive a restart, use
//! [`FileSettingsStore`](crate::file::FileSettingsStore).

use shiftcal_core::error::Result;
use shiftcal_core::ports::SettingsStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory implementation of SettingsStore. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    /// Create a new, empty in-memory settings store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        Ok(())
    }
}
