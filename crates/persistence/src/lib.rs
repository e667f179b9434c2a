// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Office Report system.
//!
//! This crate stores employees, daily reports, tasks and login sessions in
//! `SQLite` through Diesel. A single [`Persistence`] handle owns the
//! connection and is passed explicitly to every operation.
//!
//! ## Schema
//!
//! Migrations under `migrations/` are embedded at compile time and applied
//! whenever a handle is constructed, so opening an existing database is
//! idempotent. Foreign key enforcement is switched on and verified during
//! construction; a connection without it is rejected.
//!
//! ## Storage conventions
//!
//! - Calendar dates are `YYYY-MM-DD` text, so lexical and chronological
//!   order agree.
//! - Timestamps are `CURRENT_TIMESTAMP` text in UTC.
//! - Booleans are integers 0/1.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, so tests are isolated without touching disk.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use office_report_domain::{DateRange, ReportEntry, TaskStatusFilter};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    AdminDashboardData, EmployeeData, EmployeeDashboardData, ReportFilter, SessionData,
    SubmitOutcome, TaskData, TaskFilter,
};
pub use error::PersistenceError;
pub use mutations::employees::ADMINISTRATOR_FULL_NAME;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Storage handle for the Office Report system.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a handle backed by a fresh in-memory database.
    ///
    /// Each call receives a distinct shared-cache database name from an
    /// atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Opens or creates a file-backed database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Seeds the administrator record (employee 1) if it is absent.
    ///
    /// Returns `true` if the record was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn ensure_administrator(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<bool, PersistenceError> {
        mutations::employees::ensure_administrator(&mut self.conn, username, password)
    }

    /// Creates an employee and returns its ID.
    ///
    /// # Arguments
    ///
    /// * `username` - Unique login name
    /// * `password` - Plain-text password (will be hashed)
    /// * `full_name` - Display name
    /// * `profile_pic_url` - Picture URL
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateUsername` if the username is taken.
    pub fn create_employee(
        &mut self,
        username: &str,
        password: &str,
        full_name: &str,
        profile_pic_url: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::employees::create_employee(
            &mut self.conn,
            username,
            password,
            full_name,
            profile_pic_url,
        )
    }

    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_employee_by_id(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<EmployeeData>, PersistenceError> {
        queries::employees::get_employee_by_id(&mut self.conn, employee_id)
    }

    /// Retrieves an employee by exact username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_employee_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<EmployeeData>, PersistenceError> {
        queries::employees::get_employee_by_username(&mut self.conn, username)
    }

    /// Lists all employees except the administrator, by full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_employees(&mut self) -> Result<Vec<EmployeeData>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    /// Lists active employees except the administrator, by full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_active_employees(&mut self) -> Result<Vec<EmployeeData>, PersistenceError> {
        queries::employees::list_active_employees(&mut self.conn)
    }

    /// Activates or deactivates an employee.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EmployeeNotFound` if the employee does not exist.
    pub fn set_employee_active(
        &mut self,
        employee_id: i64,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::employees::set_employee_active(&mut self.conn, employee_id, is_active)
    }

    /// Replaces an employee's password.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EmployeeNotFound` if the employee does not exist.
    pub fn update_password(
        &mut self,
        employee_id: i64,
        new_password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::employees::update_password(&mut self.conn, employee_id, new_password)
    }

    /// Verifies a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash is malformed.
    pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
        queries::employees::verify_password(password, password_hash)
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// Runs the admin report query.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_reports(
        &mut self,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportEntry>, PersistenceError> {
        queries::reports::query_reports(&mut self.conn, filter)
    }

    /// Lists one employee's reports within a range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reports_for_employee(
        &mut self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<ReportEntry>, PersistenceError> {
        queries::reports::list_reports_for_employee(&mut self.conn, employee_id, range)
    }

    /// Finds an employee's report for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_report_for_date(
        &mut self,
        employee_id: i64,
        report_date: Date,
    ) -> Result<Option<ReportEntry>, PersistenceError> {
        queries::reports::find_report_for_date(&mut self.conn, employee_id, report_date)
    }

    /// Retrieves a report by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_report(&mut self, report_id: i64) -> Result<Option<ReportEntry>, PersistenceError> {
        queries::reports::get_report(&mut self.conn, report_id)
    }

    /// Creates or overwrites an employee's report for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn submit_report(
        &mut self,
        employee_id: i64,
        report_date: Date,
        report_text: &str,
    ) -> Result<SubmitOutcome, PersistenceError> {
        mutations::reports::submit_report(&mut self.conn, employee_id, report_date, report_text)
    }

    /// Edits a report owned by `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReportNotFound` if the employee owns no
    /// such report.
    pub fn update_report(
        &mut self,
        report_id: i64,
        employee_id: i64,
        report_date: Date,
        report_text: &str,
    ) -> Result<(), PersistenceError> {
        mutations::reports::update_report(
            &mut self.conn,
            report_id,
            employee_id,
            report_date,
            report_text,
        )
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// Assigns a task and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EmployeeNotFound` if the assignee does not exist.
    pub fn create_task(
        &mut self,
        employee_id: i64,
        task_description: &str,
        due_date: Option<Date>,
    ) -> Result<i64, PersistenceError> {
        mutations::tasks::create_task(&mut self.conn, employee_id, task_description, due_date)
    }

    /// Lists tasks for the admin view.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tasks(&mut self, filter: &TaskFilter) -> Result<Vec<TaskData>, PersistenceError> {
        queries::tasks::list_tasks(&mut self.conn, filter)
    }

    /// Lists one employee's tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tasks_for_employee(
        &mut self,
        employee_id: i64,
        status: TaskStatusFilter,
    ) -> Result<Vec<TaskData>, PersistenceError> {
        queries::tasks::list_tasks_for_employee(&mut self.conn, employee_id, status)
    }

    /// Retrieves a task by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_task(&mut self, task_id: i64) -> Result<Option<TaskData>, PersistenceError> {
        queries::tasks::get_task(&mut self.conn, task_id)
    }

    /// Marks a task complete or pending.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::TaskNotFound` if the task does not exist.
    pub fn set_task_completed(
        &mut self,
        task_id: i64,
        is_completed: bool,
    ) -> Result<(), PersistenceError> {
        mutations::tasks::set_task_completed(&mut self.conn, task_id, is_completed)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::TaskNotFound` if the task does not exist.
    pub fn delete_task(&mut self, task_id: i64) -> Result<(), PersistenceError> {
        mutations::tasks::delete_task(&mut self.conn, task_id)
    }

    // ========================================================================
    // Dashboards
    // ========================================================================

    /// Builds the administrator overview.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub fn admin_dashboard(&mut self) -> Result<AdminDashboardData, PersistenceError> {
        queries::dashboard::admin_dashboard(&mut self.conn)
    }

    /// Builds an employee's overview.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub fn employee_dashboard(
        &mut self,
        employee_id: i64,
        first_of_month: Date,
    ) -> Result<EmployeeDashboardData, PersistenceError> {
        queries::dashboard::employee_dashboard(&mut self.conn, employee_id, first_of_month)
    }

    // ========================================================================
    // Session Management
    // ========================================================================

    /// Creates a session and returns its ID.
    ///
    /// # Arguments
    ///
    /// * `session_token` - The unique session token
    /// * `employee_id` - The session owner
    /// * `expires_at` - Expiry as `YYYY-MM-DD HH:MM:SS` UTC
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        employee_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::sessions::create_session(&mut self.conn, session_token, employee_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, session_token)
    }

    /// Counts sessions belonging to an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_sessions_for_employee(&mut self, employee_id: i64) -> Result<i64, PersistenceError> {
        queries::sessions::count_sessions_for_employee(&mut self.conn, employee_id)
    }

    /// Records activity on a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::sessions::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    /// Deletes every session belonging to an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_sessions_for_employee(
        &mut self,
        employee_id: i64,
    ) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_sessions_for_employee(&mut self.conn, employee_id)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_expired_sessions(&mut self.conn)
    }
}
