//! Anchor date persistence on top of a [`SettingsStore`]

use crate::error::{Result, ShiftcalError};
use crate::models::AnchorDate;
use crate::ports::SettingsStore;

/// Settings key holding the anchor ("first day of work") date
pub const FIRST_DAY_OF_WORK_KEY: &str = "first_day_of_work";

/// Read the configured anchor, `None` when unconfigured.
///
/// A stored value that cannot be parsed is reported, not treated as absent.
pub fn load_anchor<S: SettingsStore + ?Sized>(store: &S) -> Result<Option<AnchorDate>> {
    let Some(raw) = store.get(FIRST_DAY_OF_WORK_KEY)? else {
        tracing::debug!("No anchor date configured");
        return Ok(None);
    };

    let anchor = AnchorDate::parse(&raw).map_err(|e| ShiftcalError::SettingsCorrupt {
        key: FIRST_DAY_OF_WORK_KEY.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })?;

    tracing::debug!(%anchor, "Loaded anchor date");
    Ok(Some(anchor))
}

pub fn save_anchor<S: SettingsStore + ?Sized>(store: &S, anchor: AnchorDate) -> Result<()> {
    let value = anchor.to_iso_string()?;
    store.set(FIRST_DAY_OF_WORK_KEY, &value)?;
    tracing::info!(%anchor, stored = %value, "Anchor date saved");
    Ok(())
}

pub fn clear_anchor<S: SettingsStore + ?Sized>(store: &S) -> Result<()> {
    store.remove(FIRST_DAY_OF_WORK_KEY)?;
    tracing::info!("Anchor date cleared");
    Ok(())
}
