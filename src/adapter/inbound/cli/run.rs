//! Handler for the interactive session.
//!
//! Loads configuration, sets up output and logging, opens the database,
//! and hands control to the menu loop.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing::info;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::diagnostic::{config_report, DatabaseDiagnostic};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::prompt::TerminalPrompter;
use crate::adapter::inbound::cli::render::TerminalPresenter;
use crate::adapter::outbound::sqlite::SqliteRosterStore;
use crate::application::Session;
use crate::error::ConfigError;
use crate::infrastructure::config::Config;

/// Run one interactive session.
///
/// # Errors
/// Returns a report for startup failures (configuration, database) and for
/// a terminal failure during the session.
pub fn execute(cli: Cli) -> miette::Result<()> {
    let config = load_config(cli.config.as_deref())?.with_database(cli.database.clone());
    config.validate().into_diagnostic()?;

    let color = cli.color.enabled();
    output::configure(OutputConfig::new(cli.json, color, cli.verbose));
    config.logging.init(cli.log_level_override());
    info!(database = %config.database, "roster starting");

    let store = SqliteRosterStore::open(&config.database)
        .map_err(|e| miette::Report::new(DatabaseDiagnostic::new(&config.database, &e)))?;

    output::header(env!("CARGO_PKG_VERSION"));
    if output::verbosity() > 0 {
        output::field("Database", &config.database);
        println!();
    }

    Session::new(store, TerminalPrompter::new(color), TerminalPresenter::new())
        .run()
        .into_diagnostic()
}

/// Load the configuration file, or defaults when none was given.
fn load_config(path: Option<&Path>) -> miette::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let display = path.display().to_string();

    let src = std::fs::read_to_string(path)
        .map_err(|e| config_report(&display, None, ConfigError::ReadFile(e).into()))?;
    Config::parse_toml(&src).map_err(|e| config_report(&display, Some(src.clone()), e))
}
