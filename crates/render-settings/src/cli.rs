//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line options for the settings tool.
#[derive(Debug, Parser)]
#[command(name = "render-settings", version, about = "Validate image rendering settings files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and validate a settings file
    Check {
        /// Path to a YAML settings file
        #[arg(env = "RENDER_SETTINGS_FILE")]
        file: Option<PathBuf>,
    },
    /// Print the validated settings as JSON
    Show {
        /// Path to a YAML settings file
        #[arg(env = "RENDER_SETTINGS_FILE")]
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
