// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session mutations.
//!
//! `expires_at` is written in `SQLite`'s `YYYY-MM-DD HH:MM:SS` UTC form so
//! it compares correctly against `CURRENT_TIMESTAMP`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

/// Creates a new session for an employee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `employee_id` - The session owner
/// * `expires_at` - Expiry as `YYYY-MM-DD HH:MM:SS` UTC
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    employee_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::employee_id.eq(employee_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;
    debug!(session_id, employee_id, "Session created");
    Ok(session_id)
}

/// Records activity on a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(sessions::last_activity_at.eq(current_timestamp()))
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by token.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;
    Ok(())
}

/// Deletes every session belonging to an employee.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_sessions_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::employee_id.eq(employee_id))
        .execute(conn)?;

    info!(
        "Deleted {} sessions for employee ID: {}",
        rows_affected, employee_id
    );
    Ok(rows_affected)
}

/// Deletes all sessions whose expiry has passed.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(current_timestamp()))
        .execute(conn)?;

    if rows_affected > 0 {
        info!("Deleted {} expired sessions", rows_affected);
    }
    Ok(rows_affected)
}
