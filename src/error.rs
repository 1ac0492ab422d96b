use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the terminal itself failed (closed input, interrupt).
    ///
    /// These are the only errors that end the menu loop.
    #[must_use]
    pub fn is_prompt(&self) -> bool {
        matches!(self, Error::Prompt(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<diesel::ConnectionError> for Error {
    fn from(err: diesel::ConnectionError) -> Self {
        Error::Connection(err.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_transparent() {
        let err: Error = DomainError::NothingToChoose { what: "role" }.into();
        assert_eq!(err.to_string(), "no role available to choose from");
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = Error::NotFound {
            entity: "employee",
            id: 9,
        };
        assert_eq!(err.to_string(), "employee 9 not found");
    }

    #[test]
    fn only_prompt_errors_are_terminal() {
        assert!(Error::Prompt("closed".into()).is_prompt());
        assert!(!Error::Database("locked".into()).is_prompt());
        assert!(!Error::from(DomainError::NothingToChoose { what: "role" }).is_prompt());
    }

    #[test]
    fn diesel_errors_map_to_database() {
        let err: Error = diesel::result::Error::NotFound.into();
        assert!(matches!(err, Error::Database(_)));
    }
}
