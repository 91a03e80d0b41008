use std::{env, error::Error, io};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConfigPaths;

const DAYS_TO_KEEP: usize = 7;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn json_format() -> bool {
    env::var("STRATA_LOG_FORMAT").is_ok_and(|format| format == "json")
}

/// Initialize tracing on stderr
///
/// Uses `RUST_LOG` if set, otherwise defaults to "info".
/// `STRATA_LOG_FORMAT=json` switches from pretty output to JSON lines.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init() -> Result<(), Box<dyn Error>> {
    let registry = tracing_subscriber::registry().with(env_filter());

    if json_format() {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Initialize tracing on stderr and a daily log file
///
/// Log files go to `$HOME/.strata/logs` and are kept for a week. The
/// returned guard flushes the file writer when dropped, so hold it until
/// the process exits.
///
/// # Errors
/// Returns error if the log directory cannot be created or a global
/// subscriber is already installed
pub fn init_with_file() -> Result<WorkerGuard, Box<dyn Error>> {
    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("strata")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter());

    if json_format() {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().pretty().with_target(true).with_writer(io::stderr))
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(guard)
}
