//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`]: the terminal (clap flags, dialoguer prompts, tables)
//! - [`outbound`]: the SQLite store

pub mod inbound;
pub mod outbound;
