//! Check command implementation

use super::{not_configured_hint, AppContext};
use crate::cli::CheckArgs;
use crate::output::OutputWriter;
use crate::output_types::{CheckOutput, ForecastItem};
use anyhow::Result;
use shiftcal_core::schedule::{DayForecast, RelativeDay};

pub fn execute(args: CheckArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let locale = ctx.config.locale.value;
    let date = ctx.parse_date(&args.date)?;
    let classifier = ctx.storage.classifier()?;

    let forecast = match classifier {
        Some(ref classifier) => Some(DayForecast::selected(classifier, date)?),
        None => None,
    };

    if output.is_json() {
        return output.result(CheckOutput {
            configured: classifier.is_some(),
            anchor: classifier.map(|c| c.anchor().date()),
            day: forecast.map(|f| ForecastItem::new(&f, locale)),
        });
    }

    match forecast {
        Some(forecast) => {
            output.forecast(locale.relative_caption(RelativeDay::Selected), &forecast, locale)
        }
        None => not_configured_hint(output),
    }

    Ok(())
}
