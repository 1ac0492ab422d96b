//! One handler per menu action.
//!
//! Handlers gather answers, run their query plan against the store, and
//! return a typed [`Outcome`]. They never print and never decide whether
//! the session continues; the menu loop does both.

use tracing::debug;

use super::action::Action;
use crate::domain::{
    ensure_non_empty, full_name, with_no_manager, Choice, Department, DepartmentId, EmployeeId,
    EmployeeListing, NewDepartment, NewEmployee, NewRole, RoleId, RoleListing, Salary,
};
use crate::error::Result;
use crate::port::{choose, Prompter, RosterStore};

pub const DEPARTMENT_NAME_PROMPT: &str = "What is the name of the new department?";
pub const ROLE_TITLE_PROMPT: &str = "What is the name of the role?";
pub const ROLE_SALARY_PROMPT: &str = "What is the salary of the role?";
pub const ROLE_DEPARTMENT_PROMPT: &str = "Which department does the role belong to?";
pub const EMPLOYEE_FIRST_NAME_PROMPT: &str = "What is the employee's first name?";
pub const EMPLOYEE_LAST_NAME_PROMPT: &str = "What is the employee's last name?";
pub const EMPLOYEE_ROLE_PROMPT: &str = "What is the employee's role?";
pub const EMPLOYEE_MANAGER_PROMPT: &str = "Who is the employee's manager?";
pub const UPDATE_EMPLOYEE_PROMPT: &str = "Which employee's role do you want to update?";
pub const UPDATE_ROLE_PROMPT: &str = "Which role do you want to assign to the selected employee?";

/// Shown when a salary answer is not a number.
pub const INVALID_SALARY_MESSAGE: &str = "Please enter a valid number for salary.";

/// Reported after a successful role update.
pub const EMPLOYEE_ROLE_UPDATED: &str = "Employee role updated";

/// What a handler produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Departments(Vec<Department>),
    Roles(Vec<RoleListing>),
    Employees(Vec<EmployeeListing>),
    /// A write completed; the message is shown to the user.
    Message(String),
}

/// Run the handler for `action`.
///
/// `Exit` has no handler and yields an empty message; the menu loop
/// intercepts it before dispatching.
///
/// # Errors
/// Returns whatever the handler's prompts or queries fail with.
pub fn dispatch<S, P>(action: Action, store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
{
    debug!(action = %action, "Dispatching menu action");
    match action {
        Action::ViewDepartments => view_departments(store),
        Action::ViewRoles => view_roles(store),
        Action::ViewEmployees => view_employees(store),
        Action::AddDepartment => add_department(store, prompter),
        Action::AddRole => add_role(store, prompter),
        Action::AddEmployee => add_employee(store, prompter),
        Action::UpdateEmployeeRole => update_employee_role(store, prompter),
        Action::Exit => Ok(Outcome::Message(String::new())),
    }
}

pub fn view_departments<S: RosterStore + ?Sized>(store: &mut S) -> Result<Outcome> {
    Ok(Outcome::Departments(store.departments()?))
}

pub fn view_roles<S: RosterStore + ?Sized>(store: &mut S) -> Result<Outcome> {
    Ok(Outcome::Roles(store.role_listings()?))
}

pub fn view_employees<S: RosterStore + ?Sized>(store: &mut S) -> Result<Outcome> {
    Ok(Outcome::Employees(store.employee_listings()?))
}

/// Ask for a name and insert it. Duplicate names are not checked.
pub fn add_department<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
{
    let name = prompter.input(DEPARTMENT_NAME_PROMPT)?;
    let department = store.insert_department(&NewDepartment::new(name))?;
    Ok(Outcome::Message(format!(
        "Added {} to the database",
        department.name
    )))
}

/// Ask for title, salary, and department, then insert the role.
///
/// The salary prompt re-asks until the answer is numeric.
pub fn add_role<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
{
    let departments: Vec<Choice<DepartmentId>> = store
        .departments()?
        .into_iter()
        .map(|d| Choice::new(d.name, d.id))
        .collect();
    ensure_non_empty(&departments, "department")?;

    let title = prompter.input(ROLE_TITLE_PROMPT)?;
    let salary_text = prompter.input_validated(ROLE_SALARY_PROMPT, &validate_salary)?;
    let salary = Salary::parse(&salary_text)?;
    let department_id = choose(prompter, ROLE_DEPARTMENT_PROMPT, &departments)?;

    let role = store.insert_role(&NewRole {
        title,
        salary,
        department_id,
    })?;
    Ok(Outcome::Message(format!("Added new role: {}", role.title)))
}

/// Ask for names, role, and manager, then insert the employee.
///
/// Only employees without a manager are offered as managers, after a
/// leading `None` entry that stores no manager.
pub fn add_employee<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
{
    let roles = role_choices(store)?;
    ensure_non_empty(&roles, "role")?;

    let candidates: Vec<Choice<EmployeeId>> = store
        .manager_candidates()?
        .into_iter()
        .map(|e| Choice::new(e.full_name(), e.id))
        .collect();
    let managers = with_no_manager(candidates);

    let first_name = prompter.input(EMPLOYEE_FIRST_NAME_PROMPT)?;
    let last_name = prompter.input(EMPLOYEE_LAST_NAME_PROMPT)?;
    let role_id = choose(prompter, EMPLOYEE_ROLE_PROMPT, &roles)?;
    let manager_id = choose(prompter, EMPLOYEE_MANAGER_PROMPT, &managers)?;

    let employee = store.insert_employee(&NewEmployee {
        first_name,
        last_name,
        role_id,
        manager_id,
    })?;
    Ok(Outcome::Message(format!(
        "Added new employee: {}",
        full_name(&employee.first_name, &employee.last_name)
    )))
}

/// Ask which employee gets which role, then update only that reference.
pub fn update_employee_role<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: RosterStore + ?Sized,
    P: Prompter + ?Sized,
{
    let employees: Vec<Choice<EmployeeId>> = store
        .employees()?
        .into_iter()
        .map(|e| Choice::new(e.full_name(), e.id))
        .collect();
    ensure_non_empty(&employees, "employee")?;
    let roles = role_choices(store)?;
    ensure_non_empty(&roles, "role")?;

    let employee_id = choose(prompter, UPDATE_EMPLOYEE_PROMPT, &employees)?;
    let role_id = choose(prompter, UPDATE_ROLE_PROMPT, &roles)?;

    store.update_employee_role(employee_id, role_id)?;
    Ok(Outcome::Message(EMPLOYEE_ROLE_UPDATED.to_string()))
}

fn role_choices<S: RosterStore + ?Sized>(store: &mut S) -> Result<Vec<Choice<RoleId>>> {
    Ok(store
        .roles()?
        .into_iter()
        .map(|r| Choice::new(r.title, r.id))
        .collect())
}

fn validate_salary(input: &str) -> std::result::Result<(), String> {
    Salary::parse(input)
        .map(|_| ())
        .map_err(|_| INVALID_SALARY_MESSAGE.to_string())
}
