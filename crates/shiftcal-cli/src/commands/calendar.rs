//! Calendar command implementation

use super::{not_configured_hint, AppContext};
use crate::cli::CalendarArgs;
use crate::output::{paint, OutputWriter};
use crate::output_types::{CalendarOutput, LegendItem};
use anyhow::Result;
use chrono::Datelike;
use shiftcal_core::dates;
use shiftcal_core::locale::Locale;
use shiftcal_core::models::CYCLE;
use shiftcal_core::schedule::MonthGrid;

pub fn execute(args: CalendarArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let locale = ctx.config.locale.value;
    let in_month = match args.month.as_deref() {
        Some(month) => dates::parse_month(month)?,
        None => ctx.today,
    };
    let month_name = format!("{} {}", locale.month_name(in_month.month()), in_month.year());

    let classifier = ctx.storage.classifier()?;
    let grid = classifier
        .map(|c| MonthGrid::build(&c, in_month, ctx.config.week_start.value, ctx.today))
        .transpose()?;

    if output.is_json() {
        return output.result(CalendarOutput {
            configured: classifier.is_some(),
            anchor: classifier.map(|c| c.anchor().date()),
            month_name,
            grid,
            legend: LegendItem::all(locale),
        });
    }

    output.heading(&month_name);
    let Some(grid) = grid else {
        not_configured_hint(output);
        return Ok(());
    };

    for line in render_grid(&grid, locale) {
        output.line(line);
    }

    output.section(locale.legend_title());
    for state in CYCLE {
        output.line(format!("{} {}", paint("■", state), state.label(locale)));
    }

    Ok(())
}

/// Weekday header followed by one line per week; each day number is drawn in its state color
fn render_grid(grid: &MonthGrid, locale: Locale) -> Vec<String> {
    let header = grid
        .weekdays()
        .iter()
        .map(|weekday| locale.weekday_short(*weekday).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header];
    for week in &grid.weeks {
        let cells = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => {
                    let day = paint(format!("{:>2}", cell.date.day()), cell.state);
                    if cell.is_today {
                        day.bold().underlined().to_string()
                    } else {
                        day.to_string()
                    }
                }
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(" "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use shiftcal_core::models::AnchorDate;
    use shiftcal_core::CycleClassifier;

    #[test]
    fn test_render_grid_layout() {
        console::set_colors_enabled(false);
        let anchor = AnchorDate::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let grid = MonthGrid::build(
            &CycleClassifier::new(anchor),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            Weekday::Mon,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .unwrap();

        let lines = render_grid(&grid, Locale::En);
        assert_eq!(lines[0], "Mo Tu We Th Fr Sa Su");
        // February 2024 starts on a Thursday
        assert_eq!(lines[1], "          1  2  3  4");
        assert_eq!(lines.len(), 1 + grid.weeks.len());
    }
}
