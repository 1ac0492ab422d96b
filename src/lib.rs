//! Roster - an interactive terminal tool for a small company directory.
//!
//! Departments, roles, and employees live in a SQLite database. A menu
//! loop lists them as tables and walks the user through adding records
//! and reassigning an employee's role.
//!
//! # Architecture
//!
//! - [`domain`] - Records, identifiers, salaries, and choice lists
//! - [`port`] - Traits the application drives: store, prompter, presenter
//! - [`application`] - The menu loop and one handler per action
//! - [`adapter`] - Diesel/SQLite store and the terminal front end
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use roster::adapter::outbound::sqlite::SqliteRosterStore;
//! use roster::domain::NewDepartment;
//! use roster::port::RosterStore;
//!
//! let mut store = SqliteRosterStore::open("roster.db").unwrap();
//! store.insert_department(&NewDepartment::new("Engineering")).unwrap();
//! for department in store.departments().unwrap() {
//!     println!("{} {}", department.id, department.name);
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
