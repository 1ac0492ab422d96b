//! Application services (use cases).
//!
//! The menu loop and the per-action handlers. They depend only on the
//! domain and the ports, never on a concrete adapter.

pub mod action;
pub mod handler;
pub mod menu;
pub mod session;

pub use action::{Action, MENU_PROMPT};
pub use handler::Outcome;
pub use menu::Flow;
pub use session::Session;
