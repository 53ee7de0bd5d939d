//! Status command implementation

use super::{not_configured_hint, AppContext};
use crate::cli::StatusArgs;
use crate::output::OutputWriter;
use crate::output_types::{ForecastItem, StatusOutput};
use anyhow::Result;
use shiftcal_core::schedule::Outlook;

pub fn execute(args: StatusArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let locale = ctx.config.locale.value;
    let today = match args.on.as_deref() {
        Some(on) => ctx.parse_date(on)?,
        None => ctx.today,
    };

    let title = locale.title(&ctx.config.subject_name());
    let classifier = ctx.storage.classifier()?;

    // Schedule output is suppressed entirely without an anchor
    let outlook = match classifier {
        Some(ref classifier) => Some(Outlook::for_day(classifier, today)?),
        None => None,
    };

    if output.is_json() {
        let days = outlook
            .as_ref()
            .map(|o| o.days.iter().map(|d| ForecastItem::new(d, locale)).collect())
            .unwrap_or_default();

        return output.result(StatusOutput {
            title,
            configured: classifier.is_some(),
            anchor: classifier.map(|c| c.anchor().date()),
            today,
            days,
        });
    }

    output.heading(&title);
    match outlook {
        Some(outlook) => {
            for day in &outlook.days {
                let caption = day.relative.map(|r| locale.relative_caption(r)).unwrap_or_default();
                output.forecast(caption, day, locale);
            }
        }
        None => not_configured_hint(output),
    }

    Ok(())
}
