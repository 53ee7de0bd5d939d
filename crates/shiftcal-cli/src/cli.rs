use clap::{Parser, Subcommand};
use shiftcal_core::locale::Locale;
use std::path::PathBuf;

/// shiftcal - Is the subject working today?
#[derive(Parser, Debug)]
#[command(name = "shiftcal")]
#[command(about = "Four-day rotating shift schedule: day, night, rest, free", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show planned changes without writing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Directory holding settings.json and config.toml
    /// (defaults to $SHIFTCAL_HOME, then ~/.shiftcal)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Display language
    #[arg(long, global = true)]
    pub locale: Option<LocaleArg>,

    /// Name of the person whose schedule is shown
    #[arg(long, global = true)]
    pub subject: Option<String>,

    /// Defaults to `status` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Display language selection
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LocaleArg {
    /// Russian (default)
    Ru,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ru => Locale::Ru,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today, tomorrow and the day after tomorrow
    Status(StatusArgs),

    /// Show the work state on a selected date
    Check(CheckArgs),

    /// Show a month calendar colored by work state
    Calendar(CalendarArgs),

    /// List the work state for a run of upcoming days
    Upcoming(UpcomingArgs),

    /// Show, set or clear the first day-shift date
    Anchor(AnchorArgs),

    /// Show effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug, Default)]
pub struct StatusArgs {
    /// Treat this date as today (YYYY-MM-DD, DD.MM.YYYY, today, tomorrow)
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The date to check (YYYY-MM-DD, DD.MM.YYYY, today, tomorrow, yesterday)
    pub date: String,
}

#[derive(Parser, Debug)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM (defaults to the current month)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UpcomingArgs {
    /// First day of the list (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Number of days to list
    #[arg(long, short = 'n', default_value = "14", value_parser = clap::value_parser!(u16).range(1..=366))]
    pub days: u16,
}

#[derive(Parser, Debug)]
pub struct AnchorArgs {
    #[command(subcommand)]
    pub command: AnchorCommand,
}

#[derive(Subcommand, Debug)]
pub enum AnchorCommand {
    /// Show the configured day-shift date
    Show,

    /// Set the day-shift date (day 0 of the cycle)
    Set(AnchorSetArgs),

    /// Remove the configured day-shift date
    Clear,
}

#[derive(Parser, Debug)]
pub struct AnchorSetArgs {
    /// A date on which the subject works a day shift; past and future both work
    #[arg(required_unless_present = "interactive")]
    pub date: Option<String>,

    /// Prompt for the date
    #[arg(long, short = 'i', conflicts_with = "date")]
    pub interactive: bool,
}
