//! Employees and their display projection.

use serde::{Deserialize, Serialize};

use super::id::{EmployeeId, RoleId};
use super::money::Salary;

/// A persisted employee.
///
/// `manager_id` is `None` for top-level employees. `role_id` is nullable in
/// storage even though every employee created through the menu has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<RoleId>,
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    /// First and last name separated by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

/// An employee that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: RoleId,
    pub manager_id: Option<EmployeeId>,
}

impl NewEmployee {
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

/// Display projection of an employee with role, department, and manager.
///
/// Every field that comes from a joined table is optional: an employee
/// without a role (or whose manager is unset) is still listed, with those
/// columns blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeListing {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<Salary>,
    pub manager: Option<String>,
}

pub(crate) fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
