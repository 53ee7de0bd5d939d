use chrono::{Local, NaiveDate, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dates;
use crate::error::{Result, ShiftcalError};

/// Day 0 of the shift cycle: the date on which the subject works a day shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorDate(NaiveDate);

impl AnchorDate {
    /// Earliest date the anchor editor accepts
    pub const MIN: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
        Some(date) => date,
        None => panic!("invalid minimum anchor date"),
    };

    /// Wrap a calendar date without range checks.
    ///
    /// Stored values are taken as-is; only the editor path goes through
    /// [`AnchorDate::validated`].
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Wrap a date entered by the user, rejecting dates before [`AnchorDate::MIN`]
    pub fn validated(date: NaiveDate) -> Result<Self> {
        if date < Self::MIN {
            return Err(ShiftcalError::AnchorTooEarly {
                date,
                min: Self::MIN,
            });
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parse a persisted anchor string, truncating to a calendar date in `tz`
    pub fn parse_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<Self> {
        dates::parse_iso_date_in(value, tz).map(Self)
    }

    /// Parse a persisted anchor string in the local timezone
    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_in(value, &Local)
    }

    /// Persisted form: local midnight of the anchor as an RFC 3339 string
    pub fn to_iso_string_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<String>
    where
        Tz::Offset: fmt::Display,
    {
        let start = dates::start_of_day(self.0, tz).ok_or_else(|| ShiftcalError::InvalidDate {
            input: self.0.to_string(),
            reason: "day has no representable local time".to_string(),
        })?;
        Ok(start.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    pub fn to_iso_string(&self) -> Result<String> {
        self.to_iso_string_in(&Local)
    }
}

impl From<AnchorDate> for NaiveDate {
    fn from(anchor: AnchorDate) -> Self {
        anchor.0
    }
}

impl fmt::Display for AnchorDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
