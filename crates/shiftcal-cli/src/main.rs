//! shiftcal CLI - Command-line interface
//!
//! This is the presentation layer for shiftcal: it reads the anchor date from
//! the settings store and renders the shift schedule in the terminal.

mod cli;
mod commands;
mod config_loader;
mod dry_run;
mod errors;
mod interactive;
mod output;
mod output_types;
mod storage;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute the command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            errors::from_anyhow(error).display();
            ExitCode::FAILURE
        }
    }
}
