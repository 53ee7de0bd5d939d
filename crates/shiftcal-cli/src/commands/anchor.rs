//! Anchor command implementation: the day-shift date editor

use super::AppContext;
use crate::cli::{AnchorArgs, AnchorCommand, AnchorSetArgs};
use crate::dry_run::{display_planned_actions, ActionType, PlannedAction};
use crate::interactive;
use crate::output::OutputWriter;
use crate::output_types::AnchorOutput;
use anyhow::{Context, Result};
use shiftcal_core::models::AnchorDate;
use shiftcal_core::settings::FIRST_DAY_OF_WORK_KEY;

pub fn execute(args: AnchorArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    match args.command {
        AnchorCommand::Show => show(output, ctx),
        AnchorCommand::Set(set_args) => set(set_args, output, ctx),
        AnchorCommand::Clear => clear(output, ctx),
    }
}

fn show(output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let anchor = ctx.storage.anchor()?;

    if output.is_json() {
        return output.result(anchor_output(ctx, anchor)?);
    }

    let locale = ctx.config.locale.value;
    match anchor {
        Some(anchor) => output.kv(locale.anchor_field_label(), anchor),
        None => output.info("No day-shift date configured"),
    }
    Ok(())
}

fn set(args: AnchorSetArgs, output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    // Input is validated before the store is touched; a rejected date leaves
    // the stored value as it was
    let new_anchor = if args.interactive {
        let current = ctx.storage.anchor().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable stored anchor: {}", e);
            None
        });
        interactive::prompt_anchor(ctx.config.locale.value, current, ctx.today)?
    } else {
        let input = args.date.as_deref().context("A date is required")?;
        Some(interactive::parse_anchor(input, ctx.today)?)
    };

    // An empty interactive answer clears the date
    let Some(anchor) = new_anchor else {
        return clear(output, ctx);
    };

    if ctx.dry_run {
        let action = PlannedAction::new(
            ActionType::WriteSetting,
            format!("Set {} to {}", FIRST_DAY_OF_WORK_KEY, anchor),
        )
        .with_detail(format!("Stored value: {}", anchor.to_iso_string()?))
        .with_detail(format!("File: {}", ctx.storage.settings_path().display()));
        return display_planned_actions(output, &[action]);
    }

    ctx.storage.save_anchor(anchor)?;

    if output.is_json() {
        output.result(anchor_output(ctx, Some(anchor))?)
    } else {
        output.success(format!("Day-shift date set to {}", anchor));
        Ok(())
    }
}

fn clear(output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    if ctx.dry_run {
        let action = PlannedAction::new(
            ActionType::RemoveSetting,
            format!("Remove {}", FIRST_DAY_OF_WORK_KEY),
        )
        .with_detail(format!("File: {}", ctx.storage.settings_path().display()));
        return display_planned_actions(output, &[action]);
    }

    let previous = ctx.storage.stored_anchor_value()?;
    ctx.storage.clear_anchor()?;

    if output.is_json() {
        return output.result(anchor_output(ctx, None)?);
    }

    if previous.is_some() {
        output.success("Day-shift date cleared");
    } else {
        output.warning("No day-shift date was configured; nothing to clear");
    }
    Ok(())
}

fn anchor_output(ctx: &AppContext, anchor: Option<AnchorDate>) -> Result<AnchorOutput> {
    Ok(AnchorOutput {
        configured: anchor.is_some(),
        anchor: anchor.map(|a| a.date()),
        stored_value: ctx.storage.stored_anchor_value()?,
        settings_file: ctx.storage.settings_path().display().to_string(),
    })
}
