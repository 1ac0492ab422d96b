//! Outbound adapters: persistence behind the store port.

pub mod sqlite;
