//! Miette-based diagnostics for startup failures.
//!
//! Configuration parse errors point at the offending span of the TOML file;
//! database failures suggest where to look.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(roster::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file, named by its path.
    #[source_code]
    pub src: NamedSource<String>,

    /// The problematic region, when the parser reported one.
    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML parse error and the file it came from.
    #[must_use]
    pub fn from_toml(path: &str, src: String, err: &toml::de::Error) -> Self {
        Self {
            message: format!("failed to parse config: {}", err.message().trim()),
            span: err
                .span()
                .map(|range| SourceSpan::from((range.start, range.end - range.start))),
            src: NamedSource::new(path, src),
            help: Some("see config.toml.example for the accepted keys".to_string()),
        }
    }
}

/// Failure to open or prepare the roster database.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot open database '{database}': {message}")]
#[diagnostic(
    code(roster::database),
    help("check the --database path (or ROSTER_DATABASE) and that its directory exists")
)]
pub struct DatabaseDiagnostic {
    pub database: String,
    pub message: String,
}

impl DatabaseDiagnostic {
    #[must_use]
    pub fn new(database: impl Into<String>, error: &Error) -> Self {
        Self {
            database: database.into(),
            message: error.to_string(),
        }
    }
}

/// Convert a configuration load error into a report, attaching the file
/// source for parse errors.
#[must_use]
pub fn config_report(path: &str, src: Option<String>, error: Error) -> miette::Report {
    match (error, src) {
        (Error::Config(ConfigError::Parse(err)), Some(src)) => {
            miette::Report::new(ConfigDiagnostic::from_toml(path, src, &err))
        }
        (other, _) => miette::Report::msg(other.to_string()),
    }
}
