//! Menu actions and their fixed labels.

use std::fmt;

/// Prompt shown above the main menu.
pub const MENU_PROMPT: &str = "What would you like to do?";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Action; 8] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::Exit,
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::ViewDepartments => "View All Departments",
            Action::ViewRoles => "View All Roles",
            Action::ViewEmployees => "View All Employees",
            Action::AddDepartment => "Add a Department",
            Action::AddRole => "Add a Role",
            Action::AddEmployee => "Add an Employee",
            Action::UpdateEmployeeRole => "Update an Employee Role",
            Action::Exit => "Exit",
        }
    }

    /// Prefix reported when the action fails.
    ///
    /// `None` for `Exit`, which has no handler and cannot fail.
    #[must_use]
    pub const fn failure_context(self) -> Option<&'static str> {
        match self {
            Action::ViewDepartments => Some("Error viewing all departments"),
            Action::ViewRoles => Some("Error viewing all roles"),
            Action::ViewEmployees => Some("Error viewing all employees"),
            Action::AddDepartment => Some("Error adding a department"),
            Action::AddRole => Some("Error adding a role"),
            Action::AddEmployee => Some("Error adding an employee"),
            Action::UpdateEmployeeRole => Some("Error updating an employee role"),
            Action::Exit => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
