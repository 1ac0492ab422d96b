//! SQLite roster store implementation.
//!
//! Provides persistent storage for departments, roles, and employees using
//! SQLite and Diesel ORM. Simple reads and all writes go through the Diesel
//! DSL; the two joined listings are plain SQL so the manager self-join reads
//! the same way it is displayed.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::connection::{establish, run_migrations};
use super::database::model::{
    DepartmentRow, EmployeeListingRow, EmployeeRow, LastInsertRowId, NewDepartmentRow,
    NewEmployeeRow, NewRoleRow, RoleListingRow, RoleRow,
};
use super::database::schema::{department, employee, role};
use crate::domain::{
    Department, Employee, EmployeeId, EmployeeListing, NewDepartment, NewEmployee, NewRole, Role,
    RoleId, RoleListing, Salary,
};
use crate::error::{Error, Result};
use crate::port::RosterStore;

const ROLE_LISTING_SQL: &str = "\
SELECT role.id AS id, role.title AS title, department.name AS department, role.salary AS salary
FROM role
INNER JOIN department ON role.department_id = department.id
ORDER BY role.id";

const EMPLOYEE_LISTING_SQL: &str = "\
SELECT e.id AS id, e.first_name AS first_name, e.last_name AS last_name,
       role.title AS title, department.name AS department, role.salary AS salary,
       m.first_name || ' ' || m.last_name AS manager
FROM employee e
LEFT JOIN role ON e.role_id = role.id
LEFT JOIN department ON role.department_id = department.id
LEFT JOIN employee m ON e.manager_id = m.id
ORDER BY e.id";

/// SQLite-backed roster store.
///
/// Owns the session's single connection. Dropping the store (or calling
/// [`RosterStore::close`]) releases it.
pub struct SqliteRosterStore {
    conn: SqliteConnection,
}

impl SqliteRosterStore {
    /// Open the database at `database_url` and bootstrap its schema.
    ///
    /// `:memory:` gives a private in-memory database.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be opened or migrations
    /// fail.
    pub fn open(database_url: &str) -> Result<Self> {
        let mut conn = establish(database_url)?;
        run_migrations(&mut conn)?;
        info!(database = database_url, "Roster database ready");
        Ok(Self { conn })
    }

    /// Mutable access to the raw connection for ad-hoc queries in tests.
    #[cfg(any(test, feature = "testkit"))]
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
        diesel::sql_query("SELECT last_insert_rowid() AS id")
            .get_result::<LastInsertRowId>(conn)
            .map(|row| row.id)
    }

    fn department_from_row(row: DepartmentRow) -> Department {
        Department {
            id: row.id.into(),
            name: row.name,
        }
    }

    fn role_from_row(row: RoleRow) -> Result<Role> {
        Ok(Role {
            id: row.id.into(),
            title: row.title,
            salary: Salary::from_stored(&row.salary)?,
            department_id: row.department_id.into(),
        })
    }

    fn employee_from_row(row: EmployeeRow) -> Employee {
        Employee {
            id: row.id.into(),
            first_name: row.first_name,
            last_name: row.last_name,
            role_id: row.role_id.map(RoleId::new),
            manager_id: row.manager_id.map(EmployeeId::new),
        }
    }
}

impl RosterStore for SqliteRosterStore {
    fn departments(&mut self) -> Result<Vec<Department>> {
        let rows: Vec<DepartmentRow> = department::table
            .select(DepartmentRow::as_select())
            .order(department::id)
            .load(&mut self.conn)?;

        Ok(rows.into_iter().map(Self::department_from_row).collect())
    }

    fn role_listings(&mut self) -> Result<Vec<RoleListing>> {
        let rows: Vec<RoleListingRow> = diesel::sql_query(ROLE_LISTING_SQL).load(&mut self.conn)?;

        rows.into_iter()
            .map(|row| {
                Ok(RoleListing {
                    id: row.id.into(),
                    title: row.title,
                    department: row.department,
                    salary: Salary::from_stored(&row.salary)?,
                })
            })
            .collect()
    }

    fn employee_listings(&mut self) -> Result<Vec<EmployeeListing>> {
        let rows: Vec<EmployeeListingRow> =
            diesel::sql_query(EMPLOYEE_LISTING_SQL).load(&mut self.conn)?;

        rows.into_iter()
            .map(|row| {
                Ok(EmployeeListing {
                    id: row.id.into(),
                    first_name: row.first_name,
                    last_name: row.last_name,
                    title: row.title,
                    department: row.department,
                    salary: row.salary.as_deref().map(Salary::from_stored).transpose()?,
                    manager: row.manager,
                })
            })
            .collect()
    }

    fn roles(&mut self) -> Result<Vec<Role>> {
        let rows: Vec<RoleRow> = role::table
            .select(RoleRow::as_select())
            .order(role::id)
            .load(&mut self.conn)?;

        rows.into_iter().map(Self::role_from_row).collect()
    }

    fn employees(&mut self) -> Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = employee::table
            .select(EmployeeRow::as_select())
            .order(employee::id)
            .load(&mut self.conn)?;

        Ok(rows.into_iter().map(Self::employee_from_row).collect())
    }

    fn manager_candidates(&mut self) -> Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = employee::table
            .filter(employee::manager_id.is_null())
            .select(EmployeeRow::as_select())
            .order(employee::id)
            .load(&mut self.conn)?;

        Ok(rows.into_iter().map(Self::employee_from_row).collect())
    }

    fn insert_department(&mut self, new: &NewDepartment) -> Result<Department> {
        let row = NewDepartmentRow { name: &new.name };

        let id = self.conn.transaction(|conn| {
            diesel::insert_into(department::table)
                .values(&row)
                .execute(conn)?;
            Self::last_insert_rowid(conn)
        })?;

        debug!(id, name = %new.name, "Inserted department");
        Ok(Department {
            id: id.into(),
            name: new.name.clone(),
        })
    }

    fn insert_role(&mut self, new: &NewRole) -> Result<Role> {
        let row = NewRoleRow {
            title: &new.title,
            salary: new.salary.to_stored(),
            department_id: new.department_id.get(),
        };

        let id = self.conn.transaction(|conn| {
            diesel::insert_into(role::table).values(&row).execute(conn)?;
            Self::last_insert_rowid(conn)
        })?;

        debug!(id, title = %new.title, "Inserted role");
        Ok(Role {
            id: id.into(),
            title: new.title.clone(),
            salary: new.salary,
            department_id: new.department_id,
        })
    }

    fn insert_employee(&mut self, new: &NewEmployee) -> Result<Employee> {
        let row = NewEmployeeRow {
            first_name: &new.first_name,
            last_name: &new.last_name,
            role_id: Some(new.role_id.get()),
            manager_id: new.manager_id.map(EmployeeId::get),
        };

        let id = self.conn.transaction(|conn| {
            diesel::insert_into(employee::table)
                .values(&row)
                .execute(conn)?;
            Self::last_insert_rowid(conn)
        })?;

        debug!(id, name = %new.full_name(), "Inserted employee");
        Ok(Employee {
            id: id.into(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            role_id: Some(new.role_id),
            manager_id: new.manager_id,
        })
    }

    fn update_employee_role(&mut self, employee_id: EmployeeId, role_id: RoleId) -> Result<()> {
        let updated = diesel::update(employee::table.find(employee_id.get()))
            .set(employee::role_id.eq(Some(role_id.get())))
            .execute(&mut self.conn)?;

        if updated == 0 {
            return Err(Error::NotFound {
                entity: "employee",
                id: employee_id.get(),
            });
        }

        debug!(employee = %employee_id, role = %role_id, "Updated employee role");
        Ok(())
    }

    fn close(self) -> Result<()> {
        drop(self.conn);
        debug!("Closed SQLite connection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DepartmentId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn store() -> SqliteRosterStore {
        SqliteRosterStore::open(":memory:").unwrap()
    }

    fn add_department(store: &mut SqliteRosterStore, name: &str) -> Department {
        store.insert_department(&NewDepartment::new(name)).unwrap()
    }

    fn add_role(store: &mut SqliteRosterStore, title: &str, salary: &str, dept: DepartmentId) -> Role {
        store
            .insert_role(&NewRole {
                title: title.to_string(),
                salary: Salary::parse(salary).unwrap(),
                department_id: dept,
            })
            .unwrap()
    }

    fn add_employee(
        store: &mut SqliteRosterStore,
        first: &str,
        last: &str,
        role: RoleId,
        manager: Option<EmployeeId>,
    ) -> Employee {
        store
            .insert_employee(&NewEmployee {
                first_name: first.to_string(),
                last_name: last.to_string(),
                role_id: role,
                manager_id: manager,
            })
            .unwrap()
    }

    #[test]
    fn fresh_store_lists_nothing() {
        let mut store = store();
        assert!(store.departments().unwrap().is_empty());
        assert!(store.role_listings().unwrap().is_empty());
        assert!(store.employee_listings().unwrap().is_empty());
    }

    #[test]
    fn insert_department_assigns_ids_in_order() {
        let mut store = store();
        let first = add_department(&mut store, "Engineering");
        let second = add_department(&mut store, "Sales");

        assert!(second.id > first.id);
        let names: Vec<String> = store
            .departments()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Engineering", "Sales"]);
    }

    #[test]
    fn duplicate_department_names_are_accepted() {
        let mut store = store();
        add_department(&mut store, "Legal");
        add_department(&mut store, "Legal");
        assert_eq!(store.departments().unwrap().len(), 2);
    }

    #[test]
    fn role_listing_includes_department_name() {
        let mut store = store();
        let dept = add_department(&mut store, "Engineering");
        add_role(&mut store, "Engineer", "50000", dept.id);

        let listings = store.role_listings().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Engineer");
        assert_eq!(listings[0].department, "Engineering");
        assert_eq!(listings[0].salary.amount(), dec!(50000));
    }

    #[test]
    fn largest_salary_keeps_roles_readable() {
        let mut store = store();
        let dept = add_department(&mut store, "Board");
        store
            .insert_role(&NewRole {
                title: "Chair".to_string(),
                salary: Salary::new(Decimal::MAX),
                department_id: dept.id,
            })
            .unwrap();

        let listings = store.role_listings().unwrap();
        assert_eq!(listings[0].salary.amount(), Decimal::MAX);
        assert_eq!(store.roles().unwrap()[0].salary.amount(), Decimal::MAX);

        let role = store.roles().unwrap()[0].id;
        add_employee(&mut store, "Big", "Boss", role, None);
        let employees = store.employee_listings().unwrap();
        assert_eq!(employees[0].salary.map(|s| s.amount()), Some(Decimal::MAX));
    }

    #[test]
    fn salary_digits_survive_storage() {
        let mut store = store();
        let dept = add_department(&mut store, "Finance");
        add_role(&mut store, "Treasurer", "12345678901234567.89", dept.id);

        let listings = store.role_listings().unwrap();
        assert_eq!(listings[0].salary.to_string(), "12345678901234567.89");
    }

    #[test]
    fn corrupt_stored_salary_is_reported() {
        let mut store = store();
        let dept = add_department(&mut store, "Ops");
        diesel::insert_into(role::table)
            .values(&NewRoleRow {
                title: "Broken",
                salary: "lots".to_string(),
                department_id: dept.id.get(),
            })
            .execute(store.connection())
            .unwrap();

        let err = store.role_listings().unwrap_err();
        assert!(err.to_string().contains("stored salary 'lots'"));
    }

    #[test]
    fn insert_role_rejects_unknown_department() {
        let mut store = store();
        let result = store.insert_role(&NewRole {
            title: "Ghost".to_string(),
            salary: Salary::parse("1").unwrap(),
            department_id: DepartmentId::new(99),
        });
        assert!(matches!(result, Err(Error::Database(_))));
        assert!(store.roles().unwrap().is_empty());
    }

    #[test]
    fn insert_employee_rejects_unknown_manager() {
        let mut store = store();
        let dept = add_department(&mut store, "Ops");
        let role = add_role(&mut store, "Operator", "40000", dept.id);

        let result = store.insert_employee(&NewEmployee {
            first_name: "No".to_string(),
            last_name: "Body".to_string(),
            role_id: role.id,
            manager_id: Some(EmployeeId::new(42)),
        });
        assert!(result.is_err());
    }

    #[test]
    fn no_manager_is_stored_as_null() {
        let mut store = store();
        let dept = add_department(&mut store, "Ops");
        let role = add_role(&mut store, "Operator", "40000", dept.id);
        let employee = add_employee(&mut store, "Ada", "Lovelace", role.id, None);

        let manager: Option<i32> = employee::table
            .find(employee.id.get())
            .select(employee::manager_id)
            .first(store.connection())
            .unwrap();
        assert_eq!(manager, None);
    }

    #[test]
    fn employee_listing_shows_manager_full_name() {
        let mut store = store();
        let dept = add_department(&mut store, "Engineering");
        let lead = add_role(&mut store, "Lead", "90000", dept.id);
        let dev = add_role(&mut store, "Engineer", "50000", dept.id);
        let boss = add_employee(&mut store, "Grace", "Hopper", lead.id, None);
        add_employee(&mut store, "Ada", "Lovelace", dev.id, Some(boss.id));

        let listings = store.employee_listings().unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].manager, None);
        assert_eq!(listings[1].manager.as_deref(), Some("Grace Hopper"));
        assert_eq!(listings[1].title.as_deref(), Some("Engineer"));
        assert_eq!(listings[1].department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn employee_listing_keeps_rows_without_role() {
        let mut store = store();
        diesel::insert_into(employee::table)
            .values(&NewEmployeeRow {
                first_name: "Role",
                last_name: "Less",
                role_id: None,
                manager_id: None,
            })
            .execute(store.connection())
            .unwrap();

        let listings = store.employee_listings().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, None);
        assert_eq!(listings[0].department, None);
        assert_eq!(listings[0].salary, None);
    }

    #[test]
    fn manager_candidates_are_top_level_only() {
        let mut store = store();
        let dept = add_department(&mut store, "Engineering");
        let role = add_role(&mut store, "Engineer", "50000", dept.id);
        let top = add_employee(&mut store, "Grace", "Hopper", role.id, None);
        add_employee(&mut store, "Ada", "Lovelace", role.id, Some(top.id));
        let other_top = add_employee(&mut store, "Alan", "Turing", role.id, None);

        let ids: Vec<EmployeeId> = store
            .manager_candidates()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![top.id, other_top.id]);
    }

    #[test]
    fn update_employee_role_changes_only_target() {
        let mut store = store();
        let dept = add_department(&mut store, "Engineering");
        let junior = add_role(&mut store, "Engineer", "50000", dept.id);
        let senior = add_role(&mut store, "Senior Engineer", "80000", dept.id);
        let ada = add_employee(&mut store, "Ada", "Lovelace", junior.id, None);
        let alan = add_employee(&mut store, "Alan", "Turing", junior.id, None);

        store.update_employee_role(ada.id, senior.id).unwrap();
        store.update_employee_role(ada.id, senior.id).unwrap();

        let employees = store.employees().unwrap();
        let find = |id: EmployeeId| employees.iter().find(|e| e.id == id).unwrap().role_id;
        assert_eq!(find(ada.id), Some(senior.id));
        assert_eq!(find(alan.id), Some(junior.id));
    }

    #[test]
    fn update_unknown_employee_is_not_found() {
        let mut store = store();
        let dept = add_department(&mut store, "Engineering");
        let role = add_role(&mut store, "Engineer", "50000", dept.id);

        let result = store.update_employee_role(EmployeeId::new(77), role.id);
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "employee",
                id: 77
            })
        ));
    }

    #[test]
    fn close_releases_store() {
        let store = store();
        assert!(store.close().is_ok());
    }
}
