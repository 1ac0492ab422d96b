//! Persistence port for departments, roles, and employees.

use crate::domain::{
    Department, Employee, EmployeeId, EmployeeListing, NewDepartment, NewEmployee, NewRole, Role,
    RoleId, RoleListing,
};
use crate::error::Result;

/// Storage operations behind the menu actions.
///
/// Implementations hold a single connection for their whole lifetime.
/// Every method is one statement (or one read) against the store; there is
/// no multi-statement transaction exposed here.
pub trait RosterStore {
    /// All departments, in id order.
    fn departments(&mut self) -> Result<Vec<Department>>;

    /// All roles joined with their department name, in id order.
    fn role_listings(&mut self) -> Result<Vec<RoleListing>>;

    /// Every employee with role, department, salary, and manager name.
    ///
    /// Missing references yield `None` fields; no employee is dropped.
    fn employee_listings(&mut self) -> Result<Vec<EmployeeListing>>;

    /// All roles, in id order.
    fn roles(&mut self) -> Result<Vec<Role>>;

    /// All employees, in id order.
    fn employees(&mut self) -> Result<Vec<Employee>>;

    /// Employees offered as managers when adding an employee.
    ///
    /// Only top-level employees (no manager of their own) qualify.
    fn manager_candidates(&mut self) -> Result<Vec<Employee>>;

    /// Insert a department and return it with its assigned id.
    fn insert_department(&mut self, department: &NewDepartment) -> Result<Department>;

    /// Insert a role and return it with its assigned id.
    fn insert_role(&mut self, role: &NewRole) -> Result<Role>;

    /// Insert an employee and return it with its assigned id.
    fn insert_employee(&mut self, employee: &NewEmployee) -> Result<Employee>;

    /// Point an employee at a different role. Nothing else changes.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`](crate::error::Error::NotFound) when no
    /// employee has the given id.
    fn update_employee_role(&mut self, employee: EmployeeId, role: RoleId) -> Result<()>;

    /// Release the underlying connection.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
