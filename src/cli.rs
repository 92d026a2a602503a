use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Berlin Clock - show a time of day as the lamp rows of the Mengenlehreuhr
#[derive(Debug, Parser)]
#[command(name = "berlin-clock")]
#[command(about = "Show a time of day as the lamp rows of the Berlin Clock", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive terminal mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert one or more HH:mm:ss times
    #[command(alias = "show")]
    Convert {
        /// Times to convert (HH:mm:ss, or 24:00 / 24:00:00)
        #[arg(required = true, num_args = 1..)]
        times: Vec<String>,

        /// Output format, overriding the configured one
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert the current local time once
    Now {
        /// Output format, overriding the configured one
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show configuration
    #[command(aliases = ["list", "get"])]
    Show {
        /// Key to show (use "all" for all settings)
        key: Option<String>,
    },

    /// Set configuration value
    Set {
        /// Configuration key
        #[arg(required = true)]
        key: String,

        /// Configuration value
        #[arg(required = true)]
        value: String,
    },
}
