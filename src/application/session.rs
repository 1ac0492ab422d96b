//! The application context threaded through every handler.

use crate::port::{Presenter, Prompter, RosterStore};

/// Everything one interactive session needs: the store connection, the
/// prompt facility, and the output surface.
///
/// The session owns all three. Handlers borrow them per call; nothing is
/// kept between menu iterations.
pub struct Session<S, P, R> {
    pub(crate) store: S,
    pub(crate) prompter: P,
    pub(crate) presenter: R,
}

impl<S, P, R> Session<S, P, R>
where
    S: RosterStore,
    P: Prompter,
    R: Presenter,
{
    pub fn new(store: S, prompter: P, presenter: R) -> Self {
        Self {
            store,
            prompter,
            presenter,
        }
    }

    /// Run the menu until the user picks Exit.
    ///
    /// # Errors
    /// Returns an error only when the terminal fails or the store cannot
    /// be closed; handler failures are reported and the menu continues.
    pub fn run(self) -> crate::error::Result<()> {
        super::menu::run(self)
    }
}
