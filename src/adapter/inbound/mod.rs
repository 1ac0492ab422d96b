//! Inbound adapters: the terminal front end driving the menu.

pub mod cli;
