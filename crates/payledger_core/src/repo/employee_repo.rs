//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence gateway for employee payroll records.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every operation is a single statement; atomicity is the store's
//!   per-statement guarantee.
//! - Monetary columns round-trip as canonical decimal text; rows that fail
//!   to parse surface as [`RepoError::InvalidData`].
//! - The gateway holds no cache; each call round-trips to the store.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, Money};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    designation,
    basic_salary,
    hra,
    da,
    deductions
FROM employee";

pub type RepoResult<T> = Result<T, RepoError>;

/// Gateway error for employee persistence operations.
///
/// Note that "no row matched" is not represented here; update/delete report
/// absence through their boolean results.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence gateway contract for employee records.
pub trait EmployeeRepository {
    /// Persists a new employee and assigns the generated id into the
    /// instance. Returns the assigned id.
    fn create_employee(&self, employee: &mut Employee) -> RepoResult<EmployeeId>;
    /// Overwrites all six mutable fields for `employee.id`. Returns `false`
    /// when no row matched.
    fn update_employee(&self, employee: &Employee) -> RepoResult<bool>;
    /// Removes the row permanently. Returns `false` when no row matched.
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool>;
    /// Fetches one employee, `None` when absent.
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Fetches all employees ordered by ascending id.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
}

/// SQLite-backed employee repository borrowing a bootstrapped connection.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, employee: &mut Employee) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employee (
                name,
                designation,
                basic_salary,
                hra,
                da,
                deductions
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                employee.name.as_str(),
                employee.designation.as_str(),
                employee.basic_salary.to_string(),
                employee.hra.to_string(),
                employee.da.to_string(),
                employee.deductions.to_string(),
            ],
        )?;

        employee.id = self.conn.last_insert_rowid();
        Ok(employee.id)
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE employee
             SET
                name = ?1,
                designation = ?2,
                basic_salary = ?3,
                hra = ?4,
                da = ?5,
                deductions = ?6
             WHERE id = ?7;",
            params![
                employee.name.as_str(),
                employee.designation.as_str(),
                employee.basic_salary.to_string(),
                employee.hra.to_string(),
                employee.da.to_string(),
                employee.deductions.to_string(),
                employee.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM employee WHERE id = ?1;", [id])?;

        Ok(changed > 0)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let name: String = row.get("name")?;
    let designation: String = row.get("designation")?;
    let basic_salary = money_from_column(row, "basic_salary")?;
    let hra = money_from_column(row, "hra")?;
    let da = money_from_column(row, "da")?;
    let deductions = money_from_column(row, "deductions")?;

    Ok(Employee::with_id(
        id,
        name,
        designation,
        Some(basic_salary),
        Some(hra),
        Some(da),
        Some(deductions),
    ))
}

fn money_from_column(row: &Row<'_>, column: &str) -> RepoResult<Money> {
    let text: String = row.get(column)?;
    Money::from_str(text.trim()).map_err(|_| {
        RepoError::InvalidData(format!("invalid decimal `{text}` in employee.{column}"))
    })
}
