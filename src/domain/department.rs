//! Departments: the organizational units that group roles.

use serde::{Deserialize, Serialize};

use super::id::DepartmentId;

/// A persisted department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// A department that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    /// Create a new department from its display name.
    ///
    /// The name is kept verbatim. Uniqueness is left to the store.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
