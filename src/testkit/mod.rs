//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`prompt`]: `ScriptedPrompter`, a [`Prompter`](crate::port::Prompter)
//!   that replays queued answers.
//! - [`presenter`]: `RecordingPresenter`, a
//!   [`Presenter`](crate::port::Presenter) that records what it was shown.

pub mod presenter;
pub mod prompt;

pub use presenter::{Presented, RecordingPresenter};
pub use prompt::{Answer, ScriptedPrompter};
