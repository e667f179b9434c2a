// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use office_report_domain::{DateRange, EmployeeSelector, ReportEntry, TaskStatusFilter};
use serde::{Deserialize, Serialize};
use time::Date;

/// A stored employee account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeData {
    pub employee_id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub profile_pic_url: String,
    pub is_active: bool,
    pub created_at: String,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub employee_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// A stored task joined with the assignee's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    pub task_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub task_description: String,
    pub due_date: Option<Date>,
    pub is_completed: bool,
    pub created_at: String,
}

/// Criteria for the admin report query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub employee: EmployeeSelector,
    pub range: DateRange,
}

/// Criteria for the admin task listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub employee: EmployeeSelector,
    pub status: TaskStatusFilter,
}

/// Result of submitting a report for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No report existed for the date; a new row was inserted.
    Created(i64),
    /// The existing report for the date was overwritten.
    Updated(i64),
}

impl SubmitOutcome {
    /// The affected report.
    #[must_use]
    pub const fn report_id(&self) -> i64 {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }

    /// Returns whether a new row was inserted.
    #[must_use]
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Organization-wide figures shown to the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDashboardData {
    pub active_employees: i64,
    pub total_reports: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// Most recently written reports.
    pub recent_reports: Vec<ReportEntry>,
    /// Open tasks with the nearest due dates.
    pub pending_tasks: Vec<TaskData>,
}

/// Figures for a single employee's overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDashboardData {
    pub total_reports: i64,
    pub reports_this_month: i64,
    pub total_tasks: i64,
    pub pending_tasks: i64,
    /// Most recent reports by report date.
    pub latest_reports: Vec<ReportEntry>,
    /// Open tasks with the nearest due dates.
    pub upcoming_tasks: Vec<TaskData>,
}
