//! Presentation port: how results and failures reach the user.

use crate::domain::{Department, EmployeeListing, RoleListing};
use crate::error::Error;

/// Output surface for the menu loop.
pub trait Presenter {
    /// Render the department table.
    fn departments(&mut self, rows: &[Department]);

    /// Render the role table.
    fn roles(&mut self, rows: &[RoleListing]);

    /// Render the employee table.
    fn employees(&mut self, rows: &[EmployeeListing]);

    /// Report a completed write.
    fn success(&mut self, message: &str);

    /// Report a failed action. `context` is the action's fixed prefix.
    fn failure(&mut self, context: &str, error: &Error);

    /// Final line printed on exit.
    fn farewell(&mut self);
}
