use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use shiftcal_core::locale::Locale;
use shiftcal_core::models::{ColorToken, WorkState, CYCLE};
use shiftcal_core::schedule::{DayForecast, MonthGrid, RelativeDay};

/// A classified day with its display attributes
#[derive(Debug, Serialize)]
pub struct ForecastItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<RelativeDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub date: NaiveDate,
    pub weekday: String,
    pub state: WorkState,
    pub label: String,
    pub color: ColorToken,
    pub working: bool,
}

impl ForecastItem {
    pub fn new(forecast: &DayForecast, locale: Locale) -> Self {
        Self {
            relative: forecast.relative,
            caption: forecast
                .relative
                .map(|relative| locale.relative_caption(relative).to_string()),
            date: forecast.date,
            weekday: locale.weekday_name(forecast.date.weekday()).to_string(),
            state: forecast.state,
            label: forecast.state.label(locale).to_string(),
            color: forecast.state.color(),
            working: forecast.state.is_working(),
        }
    }
}

/// Output for status command
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub title: String,
    pub configured: bool,
    pub anchor: Option<NaiveDate>,
    pub today: NaiveDate,
    pub days: Vec<ForecastItem>,
}

/// Output for check command
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub configured: bool,
    pub anchor: Option<NaiveDate>,
    pub day: Option<ForecastItem>,
}

/// Output for upcoming command
#[derive(Debug, Serialize)]
pub struct UpcomingOutput {
    pub configured: bool,
    pub anchor: Option<NaiveDate>,
    pub from: NaiveDate,
    pub days: Vec<ForecastItem>,
}

/// Output for calendar command
#[derive(Debug, Serialize)]
pub struct CalendarOutput {
    pub configured: bool,
    pub anchor: Option<NaiveDate>,
    pub month_name: String,
    pub grid: Option<MonthGrid>,
    pub legend: Vec<LegendItem>,
}

#[derive(Debug, Serialize)]
pub struct LegendItem {
    pub state: WorkState,
    pub label: String,
    pub color: ColorToken,
    pub hex: String,
}

impl LegendItem {
    /// One entry per state, in cycle order
    pub fn all(locale: Locale) -> Vec<Self> {
        CYCLE
            .iter()
            .map(|state| LegendItem {
                state: *state,
                label: state.label(locale).to_string(),
                color: state.color(),
                hex: state.color().hex().to_string(),
            })
            .collect()
    }
}

/// Output for anchor show/set/clear commands
#[derive(Debug, Serialize)]
pub struct AnchorOutput {
    pub configured: bool,
    pub anchor: Option<NaiveDate>,
    pub stored_value: Option<String>,
    pub settings_file: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub home: String,
    pub settings_file: String,
    pub config_file: String,
    pub locale: ConfigValue<String>,
    pub subject: ConfigValue<String>,
    pub week_start: ConfigValue<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: String,
}
