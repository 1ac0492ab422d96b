//! Roles: job titles with a salary, owned by a department.

use serde::{Deserialize, Serialize};

use super::id::{DepartmentId, RoleId};
use super::money::Salary;

/// A persisted role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub title: String,
    pub salary: Salary,
    pub department_id: DepartmentId,
}

/// A role that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub title: String,
    pub salary: Salary,
    pub department_id: DepartmentId,
}

/// Display projection of a role joined with its department name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleListing {
    pub id: RoleId,
    pub title: String,
    pub department: String,
    pub salary: Salary,
}
