//! Upcoming command implementation

use super::{not_configured_hint, AppContext};
use crate::cli::UpcomingArgs;
use crate::output::OutputWriter;
use crate::output_types::{ForecastItem, UpcomingOutput};
use anyhow::Result;
use shiftcal_core::locale::Locale;
use shiftcal_core::schedule::{self, DayForecast};
use tabled::Tabled;

#[derive(Tabled)]
struct UpcomingRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "State")]
    label: String,
    #[tabled(rename = "Working")]
    working: String,
}

impl UpcomingRow {
    fn new(forecast: &DayForecast, locale: Locale) -> Self {
        Self {
            date: forecast.date.format("%Y-%m-%d").to_string(),
            weekday: locale.weekday_short(chrono::Datelike::weekday(&forecast.date)).to_string(),
            label: forecast.state.label(locale).to_string(),
            working: if forecast.state.is_working() { "✓" } else { "" }.to_string(),
        }
    }
}

pub fn execute(args: UpcomingArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let locale = ctx.config.locale.value;
    let from = match args.from.as_deref() {
        Some(from) => ctx.parse_date(from)?,
        None => ctx.today,
    };

    let classifier = ctx.storage.classifier()?;
    let days = match classifier {
        Some(ref classifier) => schedule::upcoming(classifier, from, usize::from(args.days))?,
        None => Vec::new(),
    };

    if output.is_json() {
        return output.result(UpcomingOutput {
            configured: classifier.is_some(),
            anchor: classifier.map(|c| c.anchor().date()),
            from,
            days: days.iter().map(|d| ForecastItem::new(d, locale)).collect(),
        });
    }

    if classifier.is_none() {
        not_configured_hint(output);
        return Ok(());
    }

    output.table(days.iter().map(|d| UpcomingRow::new(d, locale)).collect());
    Ok(())
}
