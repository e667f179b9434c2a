// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overview figures composed from the report, task and employee queries.

use diesel::SqliteConnection;
use time::Date;
use tracing::debug;

use crate::data_models::{AdminDashboardData, EmployeeDashboardData};
use crate::error::PersistenceError;
use crate::queries::{employees, reports, tasks};

const ADMIN_RECENT_REPORTS: i64 = 5;
const ADMIN_PENDING_TASKS: i64 = 5;
const EMPLOYEE_LATEST_REPORTS: i64 = 3;
const EMPLOYEE_PENDING_TASKS: i64 = 5;

/// Builds the administrator overview.
///
/// # Errors
///
/// Returns an error if any underlying query fails.
pub fn admin_dashboard(conn: &mut SqliteConnection) -> Result<AdminDashboardData, PersistenceError> {
    debug!("Building admin dashboard");

    Ok(AdminDashboardData {
        active_employees: employees::count_active_employees(conn)?,
        total_reports: reports::count_reports(conn, None, None)?,
        total_tasks: tasks::count_tasks(conn, None, None)?,
        completed_tasks: tasks::count_tasks(conn, None, Some(true))?,
        recent_reports: reports::recent_reports(conn, ADMIN_RECENT_REPORTS)?,
        pending_tasks: tasks::upcoming_tasks(conn, None, ADMIN_PENDING_TASKS)?,
    })
}

/// Builds an employee's overview.
///
/// "This month" counts reports dated on or after `first_of_month`.
///
/// # Errors
///
/// Returns an error if any underlying query fails.
pub fn employee_dashboard(
    conn: &mut SqliteConnection,
    employee_id: i64,
    first_of_month: Date,
) -> Result<EmployeeDashboardData, PersistenceError> {
    debug!("Building dashboard for employee ID: {}", employee_id);

    Ok(EmployeeDashboardData {
        total_reports: reports::count_reports(conn, Some(employee_id), None)?,
        reports_this_month: reports::count_reports(conn, Some(employee_id), Some(first_of_month))?,
        total_tasks: tasks::count_tasks(conn, Some(employee_id), None)?,
        pending_tasks: tasks::count_tasks(conn, Some(employee_id), Some(false))?,
        latest_reports: reports::latest_reports_for_employee(
            conn,
            employee_id,
            EMPLOYEE_LATEST_REPORTS,
        )?,
        upcoming_tasks: tasks::upcoming_tasks(conn, Some(employee_id), EMPLOYEE_PENDING_TASKS)?,
    })
}
