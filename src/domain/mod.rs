//! Domain types for the roster: entities, identifiers, and value objects.

mod choice;
mod department;
mod employee;
pub mod error;
mod id;
mod money;
mod role;

pub use choice::{ensure_non_empty, with_no_manager, Choice, NO_MANAGER_LABEL};
pub use department::{Department, NewDepartment};
pub use employee::{Employee, EmployeeListing, NewEmployee};
pub use error::DomainError;
pub use id::{DepartmentId, EmployeeId, RoleId};
pub use money::Salary;
pub use role::{NewRole, Role, RoleListing};

pub(crate) use employee::full_name;
