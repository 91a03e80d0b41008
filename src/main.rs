//! strata - inspect the window manager's startup configuration
//!
//! Runs the same configuration load the window manager performs at startup
//! and prints what was applied, so mistakes show up before a restart.

use std::{error::Error, process::ExitCode};

use clap::Parser;
use tracing::{Level, debug, span};

use strata::{
    cli::{Cli, CliService, formatting::format_error},
    tracing_config,
};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    let _guard = if cli.log_file {
        Some(tracing_config::init_with_file()?)
    } else {
        tracing_config::init()?;
        None
    };
    let _span = span!(Level::INFO, "strata").entered();
    debug!(command = ?cli.command, "starting");

    let service = CliService::for_override(cli.config.clone());

    // `_guard` must be dropped before the process exits.
    match service.execute(&cli.command) {
        Ok(output) => {
            if !output.text.trim().is_empty() {
                println!("{}", output.text);
            }
            Ok(if output.clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
