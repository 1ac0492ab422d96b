//! Database model types for Diesel ORM.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};

use super::schema::{department, employee, role};

/// Database row for a department.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = department)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

/// Insertable department row.
#[derive(Insertable, Debug)]
#[diesel(table_name = department)]
pub struct NewDepartmentRow<'a> {
    pub name: &'a str,
}

/// Database row for a role.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = role)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RoleRow {
    pub id: i32,
    pub title: String,
    /// Exact decimal text.
    pub salary: String,
    pub department_id: i32,
}

/// Insertable role row.
#[derive(Insertable, Debug)]
#[diesel(table_name = role)]
pub struct NewRoleRow<'a> {
    pub title: &'a str,
    pub salary: String,
    pub department_id: i32,
}

/// Database row for an employee.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = employee)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i32>,
    pub manager_id: Option<i32>,
}

/// Insertable employee row.
///
/// `manager_id: None` is written as SQL NULL.
#[derive(Insertable, Debug)]
#[diesel(table_name = employee)]
pub struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub role_id: Option<i32>,
    pub manager_id: Option<i32>,
}

/// Result row of the role listing query.
#[derive(QueryableByName, Debug)]
pub struct RoleListingRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub department: String,
    #[diesel(sql_type = Text)]
    pub salary: String,
}

/// Result row of the employee listing query.
#[derive(QueryableByName, Debug)]
pub struct EmployeeListingRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub title: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub department: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub salary: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub manager: Option<String>,
}

#[derive(QueryableByName, Debug)]
pub struct LastInsertRowId {
    #[diesel(sql_type = Integer)]
    pub id: i32,
}
