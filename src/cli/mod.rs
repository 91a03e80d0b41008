//! Command-line interface for checking a configuration.
//!
//! The binary parses [`Cli`] with clap and hands it to [`CliService`],
//! which runs a full configuration load against the built-in components
//! and renders the outcome.

pub mod formatting;
mod service;

pub use service::{CliService, CommandOutput};

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::{ConfigError, docs::DocsError};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Inspect the strata window manager configuration")]
pub struct Cli {
    /// Read this file instead of searching ~/.strata and /etc/strata
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write logs to ~/.strata/logs
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the configuration and report what was applied
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Keep loading modules after one fails
        #[arg(long)]
        best_effort: bool,
    },

    /// Load the configuration and list the registered layouts
    Layouts,

    /// Print the configuration reference of built-in components
    Schema {
        /// Component to document; all of them when omitted
        component: Option<String>,

        /// Print the raw JSON schema instead of markdown
        #[arg(long)]
        json: bool,
    },
}

/// Errors that can occur while executing a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration load was aborted
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The requested component is not built in
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// Documentation could not be generated
    #[error("Documentation error: {0}")]
    Docs(#[from] DocsError),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from(["strata", "check", "--json", "--best-effort"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Check {
                json: true,
                best_effort: true
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["strata", "layouts", "--config", "/tmp/wm.yaml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wm.yaml")));
        assert_eq!(cli.command, Command::Layouts);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["strata"]).is_err());
    }
}
