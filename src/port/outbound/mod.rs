//! Outbound ports (driven side): interfaces implemented by adapters.
//!
//! These contracts describe the collaborators the menu depends on: the
//! relational store, the prompt facility, and the output surface.

pub mod presenter;
pub mod prompt;
pub mod store;
