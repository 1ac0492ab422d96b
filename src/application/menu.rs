//! The main menu loop.
//!
//! Each iteration asks for an action, runs its handler, and shows the
//! outcome. A failed action is reported with its fixed prefix and the menu
//! comes back. The loop ends on `Exit`, or when the terminal itself fails.

use tracing::{info, warn};

use super::action::{Action, MENU_PROMPT};
use super::handler::{self, Outcome};
use super::session::Session;
use crate::domain::Choice;
use crate::error::Result;
use crate::port::{choose, Presenter, Prompter, RosterStore};

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn menu_choices() -> Vec<Choice<Action>> {
    Action::ALL
        .iter()
        .map(|action| Choice::new(action.label(), *action))
        .collect()
}

/// Run the menu until Exit.
///
/// On Exit the store is closed before the farewell line is shown.
///
/// # Errors
/// Returns prompt failures (the terminal went away) and a failure to close
/// the store. Handler failures are reported, never returned.
pub fn run<S, P, R>(session: Session<S, P, R>) -> Result<()>
where
    S: RosterStore,
    P: Prompter,
    R: Presenter,
{
    let Session {
        mut store,
        mut prompter,
        mut presenter,
    } = session;
    let choices = menu_choices();

    loop {
        let action = choose(&mut prompter, MENU_PROMPT, &choices)?;
        if step(action, &mut store, &mut prompter, &mut presenter)? == Flow::Exit {
            break;
        }
    }

    store.close()?;
    presenter.farewell();
    info!("Session ended");
    Ok(())
}

/// Run one menu action and show its result.
///
/// # Errors
/// Only prompt failures are returned; every other handler error is handed
/// to the presenter with the action's failure prefix.
pub fn step<S, P, R>(
    action: Action,
    store: &mut S,
    prompter: &mut P,
    presenter: &mut R,
) -> Result<Flow>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
    R: Presenter + ?Sized,
{
    // Every action except Exit has a handler and a failure prefix.
    let Some(context) = action.failure_context() else {
        return Ok(Flow::Exit);
    };

    match handler::dispatch(action, store, prompter) {
        Ok(outcome) => show(presenter, &outcome),
        Err(error) if error.is_prompt() => {
            warn!(action = %action, error = %error, "Prompt failed");
            return Err(error);
        }
        Err(error) => {
            warn!(action = %action, error = %error, "Action failed");
            presenter.failure(context, &error);
        }
    }
    Ok(Flow::Continue)
}

fn show<R: Presenter + ?Sized>(presenter: &mut R, outcome: &Outcome) {
    match outcome {
        Outcome::Departments(rows) => presenter.departments(rows),
        Outcome::Roles(rows) => presenter.roles(rows),
        Outcome::Employees(rows) => presenter.employees(rows),
        Outcome::Message(message) => presenter.success(message),
    }
}
