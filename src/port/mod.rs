//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the menu logic and the outside world.
//! Adapters implement them; tests drive the application through scripted
//! implementations from [`crate::testkit`].
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  (menu loop, handlers)  ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Prompter│            │ RosterStore │              │ Presenter │
//! │dialoguer│            │   SQLite    │              │  tabled   │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::presenter::Presenter;
pub use outbound::prompt::{choose, Prompter, Validator};
pub use outbound::store::RosterStore;
