//! Calendar-date helpers: truncation to local days and user date parsing.
//!
//! All shift arithmetic happens on [`NaiveDate`]. Instants only appear at the
//! edges (reading the clock, reading a stored ISO string) and are truncated to
//! their calendar date in a timezone before anything else sees them.

use crate::error::{Result, ShiftcalError};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Today's calendar date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar date of `instant` in its own timezone
pub fn truncate<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// `date` moved by `days` calendar days (negative moves backwards)
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// First instant of `date` in `tz`.
///
/// Normally local midnight. Where a DST gap swallows midnight, the first hour
/// of the day that exists is used instead.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    (0..24).find_map(|hour| {
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        tz.from_local_datetime(&date.and_time(time)).earliest()
    })
}

/// Parse an ISO-8601 date or date-time and truncate it to a calendar date in `tz`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, and offset-less
/// `YYYY-MM-DDTHH:MM:SS` which is taken as already local. A date-time with a
/// numeric offset keeps its own calendar date; a `Z` date-time is truncated in `tz`.
pub fn parse_iso_date_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        // A numeric offset is the writer's own zone, so its wall-clock date is
        // the intended day. `Z` forms carry no such zone and are moved into `tz`.
        if input.ends_with(['Z', 'z']) {
            return Ok(instant.with_timezone(tz).date_naive());
        }
        return Ok(instant.date_naive());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }

    Err(invalid_date(input, "expected an ISO-8601 date such as 2024-01-01"))
}

/// Parse a date typed by a user.
///
/// Besides ISO forms this accepts `DD.MM.YYYY` and the keywords `today`,
/// `tomorrow` and `yesterday`, resolved against `today`.
pub fn parse_user_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();

    let relative = match trimmed.to_lowercase().as_str() {
        "today" | "сегодня" => Some(0),
        "tomorrow" | "завтра" => Some(1),
        "yesterday" | "вчера" => Some(-1),
        _ => None,
    };
    if let Some(days) = relative {
        return add_days(today, days).ok_or_else(|| invalid_date(trimmed, "date out of range"));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d.%m.%Y") {
        return Ok(date);
    }

    parse_iso_date_in(trimmed, &Local).map_err(|_| {
        invalid_date(trimmed, "expected YYYY-MM-DD, DD.MM.YYYY, today, tomorrow or yesterday")
    })
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .map_err(|_| invalid_date(trimmed, "expected a month as YYYY-MM"))
}

fn invalid_date(input: &str, reason: &str) -> ShiftcalError {
    ShiftcalError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
