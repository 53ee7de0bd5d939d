use crate::error::Result;

/// Port for persisted key-value settings.
///
/// Values survive process restarts. Implementations live in `shiftcal-store`.
pub trait SettingsStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
