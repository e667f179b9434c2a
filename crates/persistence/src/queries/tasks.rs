// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use office_report_domain::TaskStatusFilter;
use tracing::debug;

use crate::data_models::{TaskData, TaskFilter};
use crate::diesel_schema::{employees, tasks};
use crate::error::PersistenceError;
use crate::queries::decode_date;

#[derive(Queryable)]
struct TaskRow {
    task_id: i64,
    employee_id: i64,
    employee_name: String,
    task_description: String,
    due_date: Option<String>,
    is_completed: i32,
    created_at: String,
}

impl TryFrom<TaskRow> for TaskData {
    type Error = PersistenceError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Self {
            task_id: row.task_id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            task_description: row.task_description,
            due_date: row.due_date.as_deref().map(decode_date).transpose()?,
            is_completed: row.is_completed != 0,
            created_at: row.created_at,
        })
    }
}

type TaskColumns = (
    tasks::task_id,
    tasks::employee_id,
    employees::full_name,
    tasks::task_description,
    tasks::due_date,
    tasks::is_completed,
    tasks::created_at,
);

const TASK_COLUMNS: TaskColumns = (
    tasks::task_id,
    tasks::employee_id,
    employees::full_name,
    tasks::task_description,
    tasks::due_date,
    tasks::is_completed,
    tasks::created_at,
);

/// Selects tasks with optional owner and completion restrictions.
///
/// Ordering is due date ascending with undated tasks last, then newest
/// first by creation time.
fn load_tasks(
    conn: &mut SqliteConnection,
    employee_name: Option<&str>,
    employee_id: Option<i64>,
    completed: Option<bool>,
    limit: Option<i64>,
) -> Result<Vec<TaskData>, PersistenceError> {
    let mut query = tasks::table
        .inner_join(employees::table)
        .select(TASK_COLUMNS)
        .order_by((
            tasks::due_date.is_null().asc(),
            tasks::due_date.asc(),
            tasks::created_at.desc(),
            tasks::task_id.desc(),
        ))
        .into_boxed();

    if let Some(name) = employee_name {
        query = query.filter(employees::full_name.eq(name.to_string()));
    }
    if let Some(id) = employee_id {
        query = query.filter(tasks::employee_id.eq(id));
    }
    if let Some(flag) = completed {
        query = query.filter(tasks::is_completed.eq(i32::from(flag)));
    }
    if let Some(n) = limit {
        query = query.limit(n);
    }

    let rows: Vec<TaskRow> = query.load(conn)?;
    rows.into_iter().map(TaskData::try_from).collect()
}

/// Lists tasks for the admin task view.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn list_tasks(
    conn: &mut SqliteConnection,
    filter: &TaskFilter,
) -> Result<Vec<TaskData>, PersistenceError> {
    debug!(
        employee = ?filter.employee.name(),
        status = %filter.status,
        "Listing tasks"
    );
    load_tasks(
        conn,
        filter.employee.name(),
        None,
        filter.status.completion_flag(),
        None,
    )
}

/// Lists the tasks assigned to one employee.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn list_tasks_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    status: TaskStatusFilter,
) -> Result<Vec<TaskData>, PersistenceError> {
    debug!("Listing {} tasks for employee ID: {}", status, employee_id);
    load_tasks(conn, None, Some(employee_id), status.completion_flag(), None)
}

/// Open tasks with the nearest due dates, optionally for one employee.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn upcoming_tasks(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    limit: i64,
) -> Result<Vec<TaskData>, PersistenceError> {
    load_tasks(conn, None, employee_id, Some(false), Some(limit))
}

/// Retrieves a task by ID.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
/// Returns `Ok(None)` if the task does not exist.
pub fn get_task(
    conn: &mut SqliteConnection,
    task_id: i64,
) -> Result<Option<TaskData>, PersistenceError> {
    let row: Option<TaskRow> = tasks::table
        .inner_join(employees::table)
        .filter(tasks::task_id.eq(task_id))
        .select(TASK_COLUMNS)
        .first(conn)
        .optional()?;

    row.map(TaskData::try_from).transpose()
}

/// Counts tasks, optionally for one employee and by completion.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_tasks(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    completed: Option<bool>,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let mut query = tasks::table.select(count(tasks::task_id)).into_boxed();

    if let Some(id) = employee_id {
        query = query.filter(tasks::employee_id.eq(id));
    }
    if let Some(flag) = completed {
        query = query.filter(tasks::is_completed.eq(i32::from(flag)));
    }

    Ok(query.first(conn)?)
}
