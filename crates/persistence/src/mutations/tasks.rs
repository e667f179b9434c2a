// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::tasks;
use crate::error::PersistenceError;
use crate::queries::employees::get_employee_by_id;
use crate::queries::encode_date;

/// Assigns a new task to an employee.
///
/// # Errors
///
/// Returns `PersistenceError::EmployeeNotFound` if the assignee does not
/// exist, or an error if the insert fails.
pub fn create_task(
    conn: &mut SqliteConnection,
    employee_id: i64,
    task_description: &str,
    due_date: Option<Date>,
) -> Result<i64, PersistenceError> {
    if get_employee_by_id(conn, employee_id)?.is_none() {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }

    diesel::insert_into(tasks::table)
        .values((
            tasks::employee_id.eq(employee_id),
            tasks::task_description.eq(task_description),
            tasks::due_date.eq(due_date.map(encode_date).transpose()?),
        ))
        .execute(conn)?;

    let task_id: i64 = conn.get_last_insert_rowid()?;
    info!(task_id, employee_id, "Task created");
    Ok(task_id)
}

/// Sets a task's completion flag.
///
/// Setting the flag to its current value is not an error.
///
/// # Errors
///
/// Returns `PersistenceError::TaskNotFound` if the task does not exist.
pub fn set_task_completed(
    conn: &mut SqliteConnection,
    task_id: i64,
    is_completed: bool,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(tasks::table)
        .filter(tasks::task_id.eq(task_id))
        .set(tasks::is_completed.eq(i32::from(is_completed)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::TaskNotFound(task_id));
    }

    info!(task_id, is_completed, "Task completion updated");
    Ok(())
}

/// Permanently removes a task.
///
/// # Errors
///
/// Returns `PersistenceError::TaskNotFound` if the task does not exist.
pub fn delete_task(conn: &mut SqliteConnection, task_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(tasks::table)
        .filter(tasks::task_id.eq(task_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::TaskNotFound(task_id));
    }

    info!(task_id, "Task deleted");
    Ok(())
}
