//! Schedule views built on top of the classifier.
//!
//! These are the shapes the presentation layer renders: the three-day outlook,
//! a single selected day, a run of upcoming days, and a month grid for the
//! calendar picker.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::cycle::CycleClassifier;
use crate::dates;
use crate::error::{Result, ShiftcalError};
use crate::models::WorkState;

/// How a forecast day relates to the day it was requested on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDay {
    Today,
    Tomorrow,
    DayAfterTomorrow,
    /// A date the user picked explicitly
    Selected,
}

impl RelativeDay {
    /// Offset in days from today, `None` for a user-selected date
    pub fn offset(self) -> Option<i64> {
        match self {
            RelativeDay::Today => Some(0),
            RelativeDay::Tomorrow => Some(1),
            RelativeDay::DayAfterTomorrow => Some(2),
            RelativeDay::Selected => None,
        }
    }
}

/// Work state of a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayForecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<RelativeDay>,
    pub date: NaiveDate,
    pub state: WorkState,
}

impl DayForecast {
    pub fn new(
        classifier: &CycleClassifier,
        date: NaiveDate,
        relative: Option<RelativeDay>,
    ) -> Result<Self> {
        Ok(Self {
            relative,
            date,
            state: classifier.classify(date)?,
        })
    }

    /// Forecast for a date picked by the user
    pub fn selected(classifier: &CycleClassifier, date: NaiveDate) -> Result<Self> {
        Self::new(classifier, date, Some(RelativeDay::Selected))
    }
}

/// Today, tomorrow and the day after
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlook {
    pub days: Vec<DayForecast>,
}

impl Outlook {
    pub fn for_day(classifier: &CycleClassifier, today: NaiveDate) -> Result<Self> {
        let days = [RelativeDay::Today, RelativeDay::Tomorrow, RelativeDay::DayAfterTomorrow]
            .into_iter()
            .map(|relative| {
                let offset = relative.offset().unwrap_or_default();
                let date = dates::add_days(today, offset).ok_or_else(|| out_of_range(today))?;
                DayForecast::new(classifier, date, Some(relative))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { days })
    }
}

/// Forecasts for `days` consecutive days starting at `from`
pub fn upcoming(
    classifier: &CycleClassifier,
    from: NaiveDate,
    days: usize,
) -> Result<Vec<DayForecast>> {
    from.iter_days()
        .take(days)
        .map(|date| DayForecast::new(classifier, date, None))
        .collect()
}

/// One day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub state: WorkState,
    pub is_today: bool,
}

/// Calendar picker view of one month.
///
/// Each row is a week starting at `week_start`; cells outside the month are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `in_month`
    pub fn build(
        classifier: &CycleClassifier,
        in_month: NaiveDate,
        week_start: Weekday,
        today: NaiveDate,
    ) -> Result<Self> {
        let first = in_month.with_day(1).ok_or_else(|| out_of_range(in_month))?;
        let (next_year, next_month) = if first.month() == 12 {
            (first.year() + 1, 1)
        } else {
            (first.year(), first.month() + 1)
        };
        let next_first =
            NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| out_of_range(first))?;
        let days_in_month = (next_first - first).num_days() as usize;

        let lead = (7 + first.weekday().num_days_from_monday() as usize
            - week_start.num_days_from_monday() as usize)
            % 7;

        let mut cells: Vec<Option<DayCell>> = vec![None; lead];
        for date in first.iter_days().take(days_in_month) {
            cells.push(Some(DayCell {
                date,
                state: classifier.classify(date)?,
                is_today: date == today,
            }));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect();

        Ok(Self {
            year: first.year(),
            month: first.month(),
            week_start,
            weeks,
        })
    }

    /// Column headers, in grid order
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// All in-month cells, in date order
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }
}

fn out_of_range(date: NaiveDate) -> ShiftcalError {
    ShiftcalError::InvalidDate {
        input: date.to_string(),
        reason: "date arithmetic out of range".to_string(),
    }
}
