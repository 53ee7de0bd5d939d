//! Command implementations

mod anchor;
mod calendar;
mod check;
mod config;
mod status;
mod upcoming;

use crate::cli::{Cli, Commands, StatusArgs};
use crate::config_loader;
use crate::output::OutputWriter;
use crate::storage::Storage;
use anyhow::Result;
use chrono::NaiveDate;
use shiftcal_core::config::{CliConfigOverrides, LayeredConfig};
use shiftcal_core::dates;
use std::path::PathBuf;

/// Everything a command needs besides its own arguments
pub struct AppContext {
    pub home: PathBuf,
    pub config: LayeredConfig,
    pub storage: Storage,
    pub today: NaiveDate,
    pub dry_run: bool,
}

impl AppContext {
    /// Parse a date argument relative to today
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        Ok(dates::parse_user_date(input, self.today)?)
    }
}

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let home = config_loader::resolve_home(cli.home);
    let overrides = CliConfigOverrides {
        locale: cli.locale.map(Into::into),
        subject: cli.subject,
    };
    let config = config_loader::load_config(&home, overrides)?;
    let storage = Storage::open(&home);

    let ctx = AppContext {
        home,
        config,
        storage,
        today: dates::today(),
        dry_run: cli.dry_run,
    };

    match cli.command.unwrap_or(Commands::Status(StatusArgs::default())) {
        Commands::Status(args) => status::execute(args, &output, &ctx),
        Commands::Check(args) => check::execute(args, &output, &ctx),
        Commands::Calendar(args) => calendar::execute(args, &output, &ctx),
        Commands::Upcoming(args) => upcoming::execute(args, &output, &ctx),
        Commands::Anchor(args) => anchor::execute(args, &output, &ctx),
        Commands::Config => config::execute(&output, &ctx),
    }
}

/// Hint shown instead of a schedule when no anchor is configured
fn not_configured_hint(output: &OutputWriter) {
    output.info("No day-shift date configured. Run 'shiftcal anchor set <DATE>' to set one.");
}
