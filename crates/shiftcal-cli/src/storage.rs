use anyhow::{Context, Result};
use shiftcal_core::models::AnchorDate;
use shiftcal_core::ports::SettingsStore;
use shiftcal_core::settings::{self, FIRST_DAY_OF_WORK_KEY};
use shiftcal_core::CycleClassifier;
use shiftcal_store::FileSettingsStore;
use std::path::Path;

/// Settings storage for the CLI, backed by `settings.json` in the home directory
pub struct Storage {
    settings: FileSettingsStore,
}

impl Storage {
    pub fn open(home: &Path) -> Self {
        Self {
            settings: FileSettingsStore::in_dir(home),
        }
    }

    pub fn settings_path(&self) -> &Path {
        self.settings.path()
    }

    /// The configured anchor, `None` when unconfigured
    pub fn anchor(&self) -> Result<Option<AnchorDate>> {
        Ok(settings::load_anchor(&self.settings)?)
    }

    /// Classifier for the configured anchor, `None` when unconfigured
    pub fn classifier(&self) -> Result<Option<CycleClassifier>> {
        Ok(self.anchor()?.map(CycleClassifier::new))
    }

    /// Raw persisted anchor string, as written to the settings file
    pub fn stored_anchor_value(&self) -> Result<Option<String>> {
        self.settings
            .get(FIRST_DAY_OF_WORK_KEY)
            .context("Failed to read settings")
    }

    pub fn save_anchor(&self, anchor: AnchorDate) -> Result<()> {
        settings::save_anchor(&self.settings, anchor).with_context(|| {
            format!("Failed to write {}", self.settings.path().display())
        })
    }

    pub fn clear_anchor(&self) -> Result<()> {
        settings::clear_anchor(&self.settings).with_context(|| {
            format!("Failed to write {}", self.settings.path().display())
        })
    }
}
