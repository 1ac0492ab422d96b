//! Command-line interface definitions.
//!
//! The roster has no subcommands: running the binary opens one interactive
//! session. Flags only choose where the data lives and how output looks.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Interactive manager for departments, roles, and employees
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides the configuration file)
    #[arg(long, env = "ROSTER_DATABASE", value_name = "URL")]
    pub database: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the environment.
    ///
    /// `auto` colors only when stdout is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

impl Cli {
    /// Log filter implied by `-v` flags, if any.
    #[must_use]
    pub fn log_level_override(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
