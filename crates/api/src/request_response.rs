// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross this boundary as ISO 8601 `YYYY-MM-DD` strings.

use office_report_domain::{
    DomainError, EmployeeGroup, MonthGroup, ReportEntry, format_iso_date, short_date_label,
};
use office_report_persistence::{EmployeeData, TaskData};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token (opaque).
    pub session_token: String,
    /// The logged-in employee record.
    pub employee_id: i64,
    /// The username.
    pub username: String,
    /// The display name.
    pub full_name: String,
    /// `Admin` or `Employee`.
    pub role: String,
    /// Session expiration timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub expires_at: String,
}

/// API response for the "who am I" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub employee_id: i64,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub role: String,
}

// ============================================================================
// Shared views
// ============================================================================

/// A report as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub report_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    /// ISO date.
    pub report_date: String,
    /// Display form, e.g. `05 Jan, 2024`.
    pub display_date: String,
    pub report_text: String,
}

impl TryFrom<&ReportEntry> for ReportInfo {
    type Error = DomainError;

    fn try_from(entry: &ReportEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            report_id: entry.report_id,
            employee_id: entry.employee_id,
            employee_name: entry.employee_name.clone(),
            report_date: format_iso_date(entry.report_date)?,
            display_date: short_date_label(entry.report_date)?,
            report_text: entry.report_text.clone(),
        })
    }
}

/// A task as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub task_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub task_description: String,
    /// ISO date, absent when the task has no due date.
    pub due_date: Option<String>,
    pub is_completed: bool,
    pub created_at: String,
}

impl TryFrom<&TaskData> for TaskInfo {
    type Error = DomainError;

    fn try_from(task: &TaskData) -> Result<Self, Self::Error> {
        Ok(Self {
            task_id: task.task_id,
            employee_id: task.employee_id,
            employee_name: task.employee_name.clone(),
            task_description: task.task_description.clone(),
            due_date: task.due_date.map(format_iso_date).transpose()?,
            is_completed: task.is_completed,
            created_at: task.created_at.clone(),
        })
    }
}

/// An employee account as presented to the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: i64,
    pub username: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<&EmployeeData> for EmployeeInfo {
    fn from(employee: &EmployeeData) -> Self {
        Self {
            employee_id: employee.employee_id,
            username: employee.username.clone(),
            full_name: employee.full_name.clone(),
            profile_pic_url: employee.profile_pic_url.clone(),
            is_active: employee.is_active,
            created_at: employee.created_at.clone(),
        }
    }
}

/// Reports filed in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthReportsInfo {
    /// e.g. `January 2024`.
    pub label: String,
    pub reports: Vec<ReportInfo>,
}

impl TryFrom<&MonthGroup> for MonthReportsInfo {
    type Error = DomainError;

    fn try_from(group: &MonthGroup) -> Result<Self, Self::Error> {
        Ok(Self {
            label: group.label.clone(),
            reports: group
                .reports
                .iter()
                .map(ReportInfo::try_from)
                .collect::<Result<Vec<ReportInfo>, DomainError>>()?,
        })
    }
}

/// One employee's reports, split by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReportsInfo {
    pub employee_name: String,
    pub report_count: usize,
    pub months: Vec<MonthReportsInfo>,
}

impl TryFrom<&EmployeeGroup> for EmployeeReportsInfo {
    type Error = DomainError;

    fn try_from(group: &EmployeeGroup) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_name: group.employee_name.clone(),
            report_count: group.reports.len(),
            months: group
                .months()?
                .iter()
                .map(MonthReportsInfo::try_from)
                .collect::<Result<Vec<MonthReportsInfo>, DomainError>>()?,
        })
    }
}

// ============================================================================
// Administrator
// ============================================================================

/// API response for the administrator dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub active_employees: i64,
    pub total_reports: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// Most recently written reports.
    pub recent_reports: Vec<ReportInfo>,
    /// Open tasks with the nearest due dates.
    pub pending_tasks: Vec<TaskInfo>,
}

/// API response listing employee accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
}

/// API request to create an employee.
///
/// Absent fields deserialize as empty and are rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    /// Picture URL; a placeholder is used when absent or blank.
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// API response for a created employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub employee_id: i64,
    pub username: String,
    pub full_name: String,
    pub message: String,
}

/// API response after activating or deactivating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatusResponse {
    pub employee_id: i64,
    pub full_name: String,
    pub is_active: bool,
    pub message: String,
}

/// API response after resetting an employee's password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub employee_id: i64,
    pub full_name: String,
    /// The password now in effect.
    pub new_password: String,
    pub message: String,
}

/// One entry in an employee filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeOption {
    pub employee_id: i64,
    pub full_name: String,
}

/// API response with the employees selectable in filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeOptionsResponse {
    pub options: Vec<EmployeeOption>,
}

/// Report filter as submitted by the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportQueryRequest {
    /// Full name of one employee; absent or blank means everyone.
    #[serde(default)]
    pub employee: Option<String>,
    /// Preset name; defaults to `all_time`.
    #[serde(default)]
    pub preset: Option<String>,
    /// Start bound for the `custom` preset (ISO date).
    #[serde(default)]
    pub start_date: Option<String>,
    /// End bound for the `custom` preset (ISO date).
    #[serde(default)]
    pub end_date: Option<String>,
}

/// API response for the administrator report view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQueryResponse {
    pub preset: String,
    /// Resolved range start (ISO date).
    pub start_date: String,
    /// Resolved range end (ISO date).
    pub end_date: String,
    pub employee: Option<String>,
    pub total_reports: usize,
    /// Matching reports grouped by employee in first-seen order.
    pub employees: Vec<EmployeeReportsInfo>,
}

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReportsResponse {
    pub filename: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Task filter as submitted by the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskQueryRequest {
    /// Full name of one employee; absent or blank means everyone.
    #[serde(default)]
    pub employee: Option<String>,
    /// `all`, `pending` or `completed`; defaults to `all`.
    #[serde(default)]
    pub status: Option<String>,
}

/// API response listing tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub total: usize,
    pub tasks: Vec<TaskInfo>,
}

/// API request to assign a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub task_description: String,
    /// Explicit due date (ISO date).
    #[serde(default)]
    pub due_date: Option<String>,
    /// When no explicit date is given, use one week from today.
    #[serde(default)]
    pub use_default_due_date: bool,
}

/// API response for an assigned task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub due_date: Option<String>,
    pub message: String,
}

/// API response after completing or reopening a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusResponse {
    pub task_id: i64,
    pub is_completed: bool,
    pub message: String,
}

/// API response after deleting a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub task_id: i64,
    pub message: String,
}

// ============================================================================
// Employee
// ============================================================================

/// API response for an employee's own dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDashboardResponse {
    pub full_name: String,
    pub profile_pic_url: String,
    pub total_reports: i64,
    pub reports_this_month: i64,
    pub total_tasks: i64,
    pub pending_tasks: i64,
    pub latest_reports: Vec<ReportInfo>,
    pub upcoming_tasks: Vec<TaskInfo>,
}

/// API request to file a daily report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitReportRequest {
    /// ISO date; defaults to today.
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub report_text: String,
}

/// API response for a filed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReportResponse {
    pub report_id: i64,
    pub report_date: String,
    /// `false` when an existing report for the date was overwritten.
    pub created: bool,
    pub message: String,
}

/// Query asking whether a report exists for a date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckReportRequest {
    /// ISO date; defaults to today.
    #[serde(default)]
    pub report_date: Option<String>,
}

/// API response describing any report already filed for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReportResponse {
    pub report_date: String,
    pub exists: bool,
    /// Warning shown before an overwrite, when a report exists.
    pub message: Option<String>,
    pub report: Option<ReportInfo>,
}

/// Range filter for an employee's own reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MyReportsRequest {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// API response with an employee's reports grouped by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyReportsResponse {
    pub preset: String,
    pub start_date: String,
    pub end_date: String,
    pub total_reports: usize,
    pub months: Vec<MonthReportsInfo>,
}

/// API request to edit one of the caller's reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateReportRequest {
    #[serde(default)]
    pub report_date: String,
    #[serde(default)]
    pub report_text: String,
}

/// API response for an edited report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReportResponse {
    pub report_id: i64,
    pub report_date: String,
    pub message: String,
}

/// Status filter for an employee's own tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MyTasksRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// API response with an employee's tasks split by completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyTasksResponse {
    pub status: String,
    pub pending: Vec<TaskInfo>,
    pub completed: Vec<TaskInfo>,
}
