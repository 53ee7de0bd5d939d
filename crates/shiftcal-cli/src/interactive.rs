use anyhow::Result;
use chrono::NaiveDate;
use console::{style, Term};
use dialoguer::Input;
use shiftcal_core::dates::parse_user_date;
use shiftcal_core::locale::Locale;
use shiftcal_core::models::AnchorDate;

/// Prompt for the day-shift date.
///
/// Re-prompts until the input is a valid anchor date. An empty answer means
/// "clear the date" and returns `None`.
pub fn prompt_anchor(
    locale: Locale,
    current: Option<AnchorDate>,
    today: NaiveDate,
) -> Result<Option<AnchorDate>> {
    // Prompts share stderr with dialoguer; stdout is reserved for command output
    let term = Term::stderr();
    term.write_line(&format!("\n{}\n", style(locale.anchor_prompt()).bold()))?;

    let mut input = Input::<String>::new()
        .with_prompt(locale.anchor_field_label())
        .allow_empty(true)
        .validate_with(move |value: &String| -> Result<(), String> {
            if value.trim().is_empty() {
                return Ok(());
            }
            parse_anchor(value, today).map(|_| ()).map_err(|e| e.to_string())
        });

    if let Some(anchor) = current {
        input = input.with_initial_text(anchor.to_string());
    }

    let answer = input.interact_text_on(&term)?;
    if answer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(parse_anchor(&answer, today)?))
}

/// Parse and range-check an anchor date typed by the user
pub fn parse_anchor(input: &str, today: NaiveDate) -> shiftcal_core::Result<AnchorDate> {
    AnchorDate::validated(parse_user_date(input, today)?)
}
