//! Four-day shift cycle classification.
//!
//! A date's state is a pure function of its signed calendar-day offset from
//! the anchor. Day differences come from proleptic Gregorian day numbers
//! (`NaiveDate - NaiveDate`), never from elapsed time, so DST transitions
//! cannot shift the result.

use crate::error::{Result, ShiftcalError};
use crate::models::{AnchorDate, WorkState, CYCLE};
use chrono::{DateTime, NaiveDate, TimeZone};

/// Classify `target` relative to `anchor`.
///
/// The anchor day is [`WorkState::WorkingDay`]; each later day advances one
/// step through [`CYCLE`] and each earlier day steps back one.
pub fn classify(target: NaiveDate, anchor: NaiveDate) -> Result<WorkState> {
    let len = CYCLE.len() as u64;
    let diff_days = (target - anchor).num_days().unsigned_abs();

    let step = if target >= anchor {
        diff_days % len
    } else {
        // diff_days >= 1 on this branch
        (len - 1) - ((diff_days - 1) % len)
    };
    let index = step as usize;

    CYCLE
        .get(index)
        .copied()
        .ok_or(ShiftcalError::StateNotFound { index })
}

/// Classify the calendar date of `instant` in its own timezone
pub fn classify_at<Tz: TimeZone>(instant: &DateTime<Tz>, anchor: NaiveDate) -> Result<WorkState> {
    classify(instant.date_naive(), anchor)
}

/// Classifier bound to a configured anchor date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleClassifier {
    anchor: AnchorDate,
}

impl CycleClassifier {
    pub fn new(anchor: AnchorDate) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> AnchorDate {
        self.anchor
    }

    pub fn classify(&self, date: NaiveDate) -> Result<WorkState> {
        classify(date, self.anchor.date())
    }

    pub fn classify_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<WorkState> {
        classify_at(instant, self.anchor.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_day_is_working_day() {
        let anchor = date(2024, 1, 1);
        assert_eq!(classify(anchor, anchor).unwrap(), WorkState::WorkingDay);
    }

    #[test]
    fn test_forward_scenarios() {
        let anchor = date(2024, 1, 1);
        assert_eq!(classify(date(2024, 1, 2), anchor).unwrap(), WorkState::WorkingNight);
        assert_eq!(classify(date(2024, 1, 3), anchor).unwrap(), WorkState::RestingAfterNight);
        assert_eq!(classify(date(2024, 1, 4), anchor).unwrap(), WorkState::FreeDay);
        assert_eq!(classify(date(2024, 1, 5), anchor).unwrap(), WorkState::WorkingDay);
    }

    #[test]
    fn test_backward_scenarios() {
        let anchor = date(2024, 1, 1);
        assert_eq!(classify(date(2023, 12, 31), anchor).unwrap(), WorkState::FreeDay);
        assert_eq!(classify(date(2023, 12, 30), anchor).unwrap(), WorkState::RestingAfterNight);
        assert_eq!(classify(date(2023, 12, 29), anchor).unwrap(), WorkState::WorkingNight);
        assert_eq!(classify(date(2023, 12, 28), anchor).unwrap(), WorkState::WorkingDay);
        assert_eq!(classify(date(2023, 12, 27), anchor).unwrap(), WorkState::FreeDay);
    }

    #[test]
    fn test_large_offsets() {
        let anchor = date(2024, 1, 1);
        // 400 years of the proleptic calendar is 146097 days, 146097 % 4 == 1
        assert_eq!(classify(date(2424, 1, 1), anchor).unwrap(), WorkState::WorkingNight);
        assert_eq!(classify(date(1624, 1, 1), anchor).unwrap(), WorkState::FreeDay);
    }

    #[test]
    fn test_leap_day_counts_as_a_day() {
        let anchor = date(2024, 2, 28);
        assert_eq!(classify(date(2024, 2, 29), anchor).unwrap(), WorkState::WorkingNight);
        assert_eq!(classify(date(2024, 3, 1), anchor).unwrap(), WorkState::RestingAfterNight);
    }

    #[test]
    fn test_classify_at_ignores_time_of_day() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let anchor = date(2024, 1, 1);
        let morning = tz.with_ymd_and_hms(2024, 1, 2, 0, 5, 0).unwrap();
        let evening = tz.with_ymd_and_hms(2024, 1, 2, 23, 55, 0).unwrap();
        assert_eq!(classify_at(&morning, anchor).unwrap(), WorkState::WorkingNight);
        assert_eq!(classify_at(&evening, anchor).unwrap(), WorkState::WorkingNight);
    }

    #[test]
    fn test_classifier_uses_its_anchor() {
        let classifier = CycleClassifier::new(AnchorDate::new(date(2024, 1, 1)));
        assert_eq!(classifier.anchor().date(), date(2024, 1, 1));
        assert_eq!(classifier.classify(date(2024, 1, 4)).unwrap(), WorkState::FreeDay);
    }
}
