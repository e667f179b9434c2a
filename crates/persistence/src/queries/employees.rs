// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee account queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use office_report_domain::ADMINISTRATOR_ID;
use tracing::debug;

use crate::data_models::EmployeeData;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    employee_id: i64,
    username: String,
    password_hash: String,
    full_name: String,
    profile_pic_url: String,
    is_active: i32,
    created_at: String,
}

impl From<EmployeeRow> for EmployeeData {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            username: row.username,
            password_hash: row.password_hash,
            full_name: row.full_name,
            profile_pic_url: row.profile_pic_url,
            is_active: row.is_active != 0,
            created_at: row.created_at,
        }
    }
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee_by_id(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<EmployeeData>, PersistenceError> {
    debug!("Looking up employee by ID: {}", employee_id);

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(EmployeeData::from))
}

/// Retrieves an employee by exact username.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has this username.
pub fn get_employee_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<EmployeeData>, PersistenceError> {
    debug!("Looking up employee by username: {}", username);

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::username.eq(username))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(EmployeeData::from))
}

/// Returns whether any employee, including the administrator, uses `username`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn username_exists(conn: &mut SqliteConnection, username: &str) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = employees::table
        .filter(employees::username.eq(username))
        .select(count(employees::employee_id))
        .first(conn)?;

    Ok(count > 0)
}

/// Lists every employee except the administrator, ordered by full name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<EmployeeData>, PersistenceError> {
    debug!("Listing employees");

    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::employee_id.ne(ADMINISTRATOR_ID))
        .select(EmployeeRow::as_select())
        .order_by((employees::full_name.asc(), employees::employee_id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(EmployeeData::from).collect())
}

/// Lists active employees except the administrator, ordered by full name.
///
/// This feeds the employee filter and the task assignment choices.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_active_employees(
    conn: &mut SqliteConnection,
) -> Result<Vec<EmployeeData>, PersistenceError> {
    debug!("Listing active employees");

    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::employee_id.ne(ADMINISTRATOR_ID))
        .filter(employees::is_active.eq(1))
        .select(EmployeeRow::as_select())
        .order_by((employees::full_name.asc(), employees::employee_id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(EmployeeData::from).collect())
}

/// Counts active employees, excluding the administrator.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_employees(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = employees::table
        .filter(employees::employee_id.ne(ADMINISTRATOR_ID))
        .filter(employees::is_active.eq(1))
        .select(count(employees::employee_id))
        .first(conn)?;

    debug!("Active employees: {}", count);
    Ok(count)
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::PasswordHashing(format!("Failed to verify password: {e}")))
}
