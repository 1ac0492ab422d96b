//! Table rendering for menu results.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{Department, EmployeeListing, RoleListing};
use crate::error::Error;
use crate::port::Presenter;

#[derive(Tabled)]
struct DepartmentRow {
    id: i32,
    name: String,
}

#[derive(Tabled)]
struct RoleRow {
    id: i32,
    title: String,
    department: String,
    salary: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    id: i32,
    first_name: String,
    last_name: String,
    title: String,
    department: String,
    salary: String,
    manager: String,
}

impl From<&Department> for DepartmentRow {
    fn from(d: &Department) -> Self {
        Self {
            id: d.id.get(),
            name: d.name.clone(),
        }
    }
}

impl From<&RoleListing> for RoleRow {
    fn from(r: &RoleListing) -> Self {
        Self {
            id: r.id.get(),
            title: r.title.clone(),
            department: r.department.clone(),
            salary: r.salary.to_string(),
        }
    }
}

impl From<&EmployeeListing> for EmployeeRow {
    fn from(e: &EmployeeListing) -> Self {
        Self {
            id: e.id.get(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            title: e.title.clone().unwrap_or_default(),
            department: e.department.clone().unwrap_or_default(),
            salary: e.salary.map(|s| s.to_string()).unwrap_or_default(),
            manager: e.manager.clone().unwrap_or_default(),
        }
    }
}

/// Build the text table for a result set. Empty sets keep their header.
pub fn table<'a, S, R>(rows: &'a [S]) -> String
where
    R: Tabled + From<&'a S>,
{
    let mut table = Table::new(rows.iter().map(R::from));
    table.with(Style::rounded());
    table.to_string()
}

/// Serialize a result set for JSON mode.
fn rows_payload<S: Serialize>(rows: &[S]) -> Result<serde_json::Value, Error> {
    Ok(serde_json::to_value(rows)?)
}

/// [`Presenter`] writing tables and status lines to the terminal.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn emit<'a, S, R>(&self, kind: &str, rows: &'a [S])
    where
        S: Serialize,
        R: Tabled + From<&'a S>,
    {
        if output::is_json() {
            match rows_payload(rows) {
                Ok(value) => output::rows(kind, value),
                Err(error) => output::error(&format!("Error rendering {kind}: {error}")),
            }
            return;
        }
        println!();
        output::lines(&table::<S, R>(rows));
        println!();
    }
}

impl Presenter for TerminalPresenter {
    fn departments(&mut self, rows: &[Department]) {
        self.emit::<_, DepartmentRow>("departments", rows);
    }

    fn roles(&mut self, rows: &[RoleListing]) {
        self.emit::<_, RoleRow>("roles", rows);
    }

    fn employees(&mut self, rows: &[EmployeeListing]) {
        self.emit::<_, EmployeeRow>("employees", rows);
    }

    fn success(&mut self, message: &str) {
        output::success(message);
    }

    fn failure(&mut self, context: &str, error: &Error) {
        output::error(&format!("{context}: {error}"));
    }

    fn farewell(&mut self) {
        output::note("Goodbye!");
    }
}
