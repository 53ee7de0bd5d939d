//! JSON file settings store.
//!
//! The file is a flat JSON object of string keys to string values. It is read
//! on every access and rewritten whole on every change; writes land in a
//! sibling temp file first and are renamed into place.

use shiftcal_core::error::{Result, ShiftcalError};
use shiftcal_core::ports::SettingsStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name inside the shiftcal home directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File-backed implementation of SettingsStore
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `settings.json` inside `home`
    pub fn in_dir(home: impl AsRef<Path>) -> Self {
        Self::new(home.as_ref().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ShiftcalError::Serialization(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ShiftcalError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "Settings written");
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.read_all()?;
        tracing::debug!(path = %self.path.display(), key, "Settings read");
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}
