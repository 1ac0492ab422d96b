//! Database connection management using Diesel ORM.
//!
//! The roster holds exactly one SQLite connection for the whole session.
//! This module opens it, applies the connection pragmas, and bootstraps the
//! schema from the embedded migrations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open a connection to the given database URL and configure it.
///
/// # Errors
/// Returns an error if the database cannot be opened or a pragma fails.
pub fn establish(database_url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    configure_sqlite_connection(&mut conn)?;
    debug!(database = database_url, "Opened SQLite connection");
    Ok(conn)
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    if !applied.is_empty() {
        debug!(count = applied.len(), "Applied schema migrations");
    }
    Ok(())
}

/// Configure SQLite connection pragmas.
///
/// Foreign keys are off by default in SQLite and must be enabled per
/// connection for the department/role/employee references to be enforced.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(conn)?;
    diesel::sql_query("PRAGMA busy_timeout = 5000").execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct TableCount {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    #[derive(diesel::QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn establish_with_memory_db() {
        assert!(establish(":memory:").is_ok());
    }

    #[test]
    fn establish_enables_foreign_keys() {
        let mut conn = establish(":memory:").unwrap();
        let rows: Vec<ForeignKeys> = diesel::sql_query("PRAGMA foreign_keys")
            .load(&mut conn)
            .unwrap();
        assert_eq!(rows[0].foreign_keys, 1);
    }

    #[test]
    fn run_migrations_creates_tables() {
        let mut conn = establish(":memory:").unwrap();
        run_migrations(&mut conn).unwrap();

        let result: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(result, vec!["department", "employee", "role"]);
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let mut conn = establish(":memory:").unwrap();

        run_migrations(&mut conn).unwrap();
        run_migrations(&mut conn).unwrap();

        let result: i64 = diesel::sql_query(
            "SELECT COUNT(*) as count FROM sqlite_master WHERE type='table' AND name='employee'",
        )
        .load::<TableCount>(&mut conn)
        .unwrap()
        .first()
        .unwrap()
        .count;

        assert_eq!(result, 1);
    }

    #[test]
    fn establish_fails_for_unreachable_path() {
        let result = establish("/nonexistent/deeply/nested/path/roster.db");
        assert!(matches!(result, Err(Error::Connection(_))));
    }
}
