//! SQLite persistence adapter.
//!
//! Implements [`RosterStore`](crate::port::RosterStore) on a single Diesel
//! `SqliteConnection`.

pub mod database;
pub mod store;

pub use store::SqliteRosterStore;
