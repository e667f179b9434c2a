// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee account mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use office_report_domain::{ADMINISTRATOR_ID, DEFAULT_PROFILE_PIC_URL};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::queries::employees::{get_employee_by_id, username_exists};

/// Display name given to the seeded administrator record.
pub const ADMINISTRATOR_FULL_NAME: &str = "Administrator";

fn hash_password(password: &str) -> Result<String, PersistenceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::PasswordHashing(format!("Failed to hash password: {e}")))
}

fn map_unique_violation(err: DieselError, username: &str) -> PersistenceError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PersistenceError::DuplicateUsername(username.to_string())
        }
        other => PersistenceError::from(other),
    }
}

/// Seeds the administrator as employee 1 if that row does not exist.
///
/// An existing row 1 is left untouched, including its password.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The configured administrator username
/// * `password` - The configured administrator password (will be hashed)
///
/// # Returns
///
/// `true` if the administrator was created by this call.
///
/// # Errors
///
/// Returns an error if hashing or the insert fails.
pub fn ensure_administrator(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<bool, PersistenceError> {
    if get_employee_by_id(conn, ADMINISTRATOR_ID)?.is_some() {
        debug!("Administrator record already present");
        return Ok(false);
    }

    let password_hash: String = hash_password(password)?;

    diesel::insert_into(employees::table)
        .values((
            employees::employee_id.eq(ADMINISTRATOR_ID),
            employees::username.eq(username),
            employees::password_hash.eq(&password_hash),
            employees::full_name.eq(ADMINISTRATOR_FULL_NAME),
            employees::profile_pic_url.eq(DEFAULT_PROFILE_PIC_URL),
        ))
        .execute(conn)
        .map_err(|e| map_unique_violation(e, username))?;

    info!("Seeded administrator account '{}'", username);
    Ok(true)
}

/// Creates a new employee account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The validated, trimmed username
/// * `password` - The plain-text password (will be hashed)
/// * `full_name` - The validated display name
/// * `profile_pic_url` - Picture URL, already defaulted by the caller
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateUsername` if the username is taken,
/// or an error if hashing or the insert fails.
pub fn create_employee(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
    full_name: &str,
    profile_pic_url: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating employee with username: {}, full_name: {}",
        username, full_name
    );

    if username_exists(conn, username)? {
        return Err(PersistenceError::DuplicateUsername(username.to_string()));
    }

    let password_hash: String = hash_password(password)?;

    diesel::insert_into(employees::table)
        .values((
            employees::username.eq(username),
            employees::password_hash.eq(&password_hash),
            employees::full_name.eq(full_name),
            employees::profile_pic_url.eq(profile_pic_url),
        ))
        .execute(conn)
        .map_err(|e| map_unique_violation(e, username))?;

    let employee_id: i64 = conn.get_last_insert_rowid()?;

    info!(employee_id, "Employee created");
    Ok(employee_id)
}

/// Sets an employee's active flag.
///
/// # Errors
///
/// Returns `PersistenceError::EmployeeNotFound` if no row was updated.
pub fn set_employee_active(
    conn: &mut SqliteConnection,
    employee_id: i64,
    is_active: bool,
) -> Result<(), PersistenceError> {
    info!(employee_id, is_active, "Updating employee active flag");

    let rows_affected: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .set(employees::is_active.eq(i32::from(is_active)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }
    Ok(())
}

/// Replaces an employee's password.
///
/// # Errors
///
/// Returns `PersistenceError::EmployeeNotFound` if no row was updated, or
/// an error if hashing fails.
pub fn update_password(
    conn: &mut SqliteConnection,
    employee_id: i64,
    new_password: &str,
) -> Result<(), PersistenceError> {
    info!("Updating password for employee ID: {}", employee_id);

    let password_hash: String = hash_password(new_password)?;

    let rows_affected: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .set(employees::password_hash.eq(&password_hash))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }
    Ok(())
}
