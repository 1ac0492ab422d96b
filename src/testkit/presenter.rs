//! Recording presenter for asserting on menu output.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Department, EmployeeListing, RoleListing};
use crate::error::Error;
use crate::port::Presenter;

/// Something the menu showed the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Presented {
    Departments(Vec<Department>),
    Roles(Vec<RoleListing>),
    Employees(Vec<EmployeeListing>),
    Success(String),
    Failure { context: String, error: String },
    Farewell,
}

/// Thread-safe collector for presenter assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<Presented>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Presented>> {
        match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn push(&self, event: Presented) {
        self.lock().push(event);
    }

    /// Everything shown so far, in order.
    pub fn events(&self) -> Vec<Presented> {
        self.lock().clone()
    }

    /// Success messages, in order.
    pub fn successes(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                Presented::Success(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Failure prefixes, in order.
    pub fn failures(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                Presented::Failure { context, .. } => Some(context.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent employee table.
    pub fn last_employees(&self) -> Option<Vec<EmployeeListing>> {
        self.lock().iter().rev().find_map(|e| match e {
            Presented::Employees(rows) => Some(rows.clone()),
            _ => None,
        })
    }

    /// The most recent department table.
    pub fn last_departments(&self) -> Option<Vec<Department>> {
        self.lock().iter().rev().find_map(|e| match e {
            Presented::Departments(rows) => Some(rows.clone()),
            _ => None,
        })
    }

    /// Whether the farewell line was printed.
    pub fn said_goodbye(&self) -> bool {
        self.lock().contains(&Presented::Farewell)
    }
}

impl Presenter for RecordingPresenter {
    fn departments(&mut self, rows: &[Department]) {
        self.push(Presented::Departments(rows.to_vec()));
    }

    fn roles(&mut self, rows: &[RoleListing]) {
        self.push(Presented::Roles(rows.to_vec()));
    }

    fn employees(&mut self, rows: &[EmployeeListing]) {
        self.push(Presented::Employees(rows.to_vec()));
    }

    fn success(&mut self, message: &str) {
        self.push(Presented::Success(message.to_string()));
    }

    fn failure(&mut self, context: &str, error: &Error) {
        self.push(Presented::Failure {
            context: context.to_string(),
            error: error.to_string(),
        });
    }

    fn farewell(&mut self) {
        self.push(Presented::Farewell);
    }
}
