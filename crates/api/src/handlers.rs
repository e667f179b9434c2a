// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One handler per API operation.
//!
//! Every handler receives the storage handle, the caller's session context
//! and a typed request, enforces authorization first, and returns a typed
//! response or an `ApiError`. Handlers that depend on the current date take
//! it as an argument.

use office_report_domain::{
    ADMINISTRATOR_ID, DatePreset, DateRange, DomainError, EmployeeGroup, EmployeeSelector,
    FullName, MonthGroup, ReportEntry, TaskStatusFilter, Username, ensure_not_administrator,
    format_iso_date, group_by_employee, group_by_month, parse_iso_date, profile_pic_or_default,
    validate_report_text, validate_task_description,
};
use office_report_export::{PDF_CONTENT_TYPE, export_filename, render_report_document};
use office_report_persistence::{
    AdminDashboardData, EmployeeDashboardData, EmployeeData, Persistence, ReportFilter,
    SessionData, SubmitOutcome, TaskData, TaskFilter,
};
use time::{Date, Duration};
use tracing::{debug, info};

use crate::auth::{AdminCredentials, AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::error::{
    ApiError, translate_domain_error, translate_export_error, translate_persistence_error,
};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AdminDashboardResponse, CheckReportRequest, CheckReportResponse, CreateEmployeeRequest,
    CreateEmployeeResponse, CreateTaskRequest, CreateTaskResponse, DeleteTaskResponse,
    EmployeeDashboardResponse, EmployeeInfo, EmployeeOption, EmployeeOptionsResponse,
    EmployeeStatusResponse, ExportReportsResponse, ListEmployeesResponse, ListTasksResponse,
    LoginRequest, LoginResponse, MyReportsRequest, MyReportsResponse, MyTasksRequest,
    MyTasksResponse, ReportInfo, ReportQueryRequest, ReportQueryResponse, ResetPasswordResponse,
    SubmitReportRequest, SubmitReportResponse, TaskQueryRequest, TaskStatusResponse,
    UpdateReportRequest, UpdateReportResponse, WhoAmIResponse,
};

/// Password assigned by an administrator reset.
pub const DEFAULT_RESET_PASSWORD: &str = "password123";

/// Days between assignment and the default due date.
pub const DEFAULT_DUE_DAYS: i64 = 7;

// ============================================================================
// Input helpers
// ============================================================================

/// Treats absent and whitespace-only optional inputs alike.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, ApiError> {
    non_blank(value)
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_preset(value: Option<&str>) -> Result<DatePreset, ApiError> {
    non_blank(value).map_or(Ok(DatePreset::default()), |v| {
        v.parse::<DatePreset>().map_err(translate_domain_error)
    })
}

fn parse_status(value: Option<&str>) -> Result<TaskStatusFilter, ApiError> {
    non_blank(value).map_or(Ok(TaskStatusFilter::default()), |v| {
        v.parse::<TaskStatusFilter>().map_err(translate_domain_error)
    })
}

/// Resolves a preset and optional custom bounds against `today`.
fn resolve_range(
    preset: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    today: Date,
) -> Result<(DatePreset, DateRange), ApiError> {
    let preset: DatePreset = parse_preset(preset)?;
    let custom_start: Option<Date> = parse_optional_date(start_date)?;
    let custom_end: Option<Date> = parse_optional_date(end_date)?;
    let range: DateRange = DateRange::resolve(preset, custom_start, custom_end, today)
        .map_err(translate_domain_error)?;
    Ok((preset, range))
}

fn iso_date(date: Date) -> Result<String, ApiError> {
    format_iso_date(date).map_err(translate_domain_error)
}

/// Converts stored rows into their client views.
fn to_views<'a, S, T>(items: &'a [S]) -> Result<Vec<T>, ApiError>
where
    T: TryFrom<&'a S, Error = DomainError>,
{
    items
        .iter()
        .map(T::try_from)
        .collect::<Result<Vec<T>, DomainError>>()
        .map_err(translate_domain_error)
}

fn first_of_month(today: Date) -> Result<Date, ApiError> {
    today.replace_day(1).map_err(|e| ApiError::Internal {
        message: format!("Failed to compute the first day of the month: {e}"),
    })
}

/// Loads a non-administrator employee or reports it missing.
fn load_employee(persistence: &mut Persistence, employee_id: i64) -> Result<EmployeeData, ApiError> {
    persistence
        .get_employee_by_id(employee_id)
        .map_err(translate_persistence_error)?
        .filter(|e| e.employee_id != ADMINISTRATOR_ID)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        })
}

fn load_task(persistence: &mut Persistence, task_id: i64) -> Result<TaskData, ApiError> {
    persistence
        .get_task(task_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Task"),
            message: format!("Task {task_id} does not exist"),
        })
}

// ============================================================================
// Authentication
// ============================================================================

/// Authenticates a user and creates a session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `admin` - The configured administrator credentials
/// * `request` - The login request
///
/// # Errors
///
/// Returns an error if the credentials are rejected or the session cannot
/// be created.
pub fn login(
    persistence: &mut Persistence,
    admin: &AdminCredentials,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, actor, employee): (String, AuthenticatedActor, EmployeeData) =
        AuthenticationService::login(persistence, admin, &request.username, &request.password)?;

    let session: Option<SessionData> = persistence
        .get_session_by_token(&session_token)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to retrieve session: {e}"),
        })?;

    let expires_at: String = session
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Session not found after creation"),
        })?
        .expires_at;

    Ok(LoginResponse {
        session_token,
        employee_id: employee.employee_id,
        username: actor.username,
        full_name: employee.full_name,
        role: actor.role.to_string(),
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Describes the caller.
#[must_use]
pub fn whoami(actor: &AuthenticatedActor, employee: &EmployeeData) -> WhoAmIResponse {
    WhoAmIResponse {
        employee_id: employee.employee_id,
        username: employee.username.clone(),
        full_name: employee.full_name.clone(),
        profile_pic_url: employee.profile_pic_url.clone(),
        role: actor.role.to_string(),
    }
}

// ============================================================================
// Administrator: dashboard and employees
// ============================================================================

/// Builds the administrator overview.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator or a query fails.
pub fn admin_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<AdminDashboardResponse, ApiError> {
    AuthorizationService::require_admin(actor, "admin_dashboard")?;

    let data: AdminDashboardData = persistence
        .admin_dashboard()
        .map_err(translate_persistence_error)?;

    Ok(AdminDashboardResponse {
        active_employees: data.active_employees,
        total_reports: data.total_reports,
        total_tasks: data.total_tasks,
        completed_tasks: data.completed_tasks,
        recent_reports: to_views(&data.recent_reports)?,
        pending_tasks: to_views(&data.pending_tasks)?,
    })
}

/// Lists every employee account except the administrator.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator or the query fails.
pub fn list_employees(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ListEmployeesResponse, ApiError> {
    AuthorizationService::require_admin(actor, "list_employees")?;

    let employees: Vec<EmployeeData> = persistence
        .list_employees()
        .map_err(translate_persistence_error)?;

    Ok(ListEmployeesResponse {
        employees: employees.iter().map(EmployeeInfo::from).collect(),
    })
}

/// Creates an employee account.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
/// * `request` - The new account's details
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not the administrator
/// - A required field is missing or invalid
/// - The password violates the policy
/// - The username already exists
pub fn create_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateEmployeeRequest,
) -> Result<CreateEmployeeResponse, ApiError> {
    AuthorizationService::require_admin(actor, "create_employee")?;

    if request.password.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Password is required"),
        });
    }
    let username: Username = Username::new(&request.username).map_err(translate_domain_error)?;
    let full_name: FullName = FullName::new(&request.full_name).map_err(translate_domain_error)?;

    PasswordPolicy::default().validate(&request.password, username.value())?;

    let profile_pic_url: String = profile_pic_or_default(request.profile_pic_url.as_deref());

    let employee_id: i64 = persistence
        .create_employee(
            username.value(),
            &request.password,
            full_name.value(),
            &profile_pic_url,
        )
        .map_err(translate_persistence_error)?;

    info!(employee_id, username = %username, "Created employee");

    Ok(CreateEmployeeResponse {
        employee_id,
        username: username.value().to_string(),
        full_name: full_name.value().to_string(),
        message: format!("Successfully added employee: {}", full_name.value()),
    })
}

fn set_employee_active(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
    is_active: bool,
) -> Result<EmployeeStatusResponse, ApiError> {
    let (action, verb): (&str, &str) = if is_active {
        ("activate_employee", "activated")
    } else {
        ("deactivate_employee", "deactivated")
    };
    AuthorizationService::require_admin(actor, action)?;
    ensure_not_administrator(employee_id, verb).map_err(translate_domain_error)?;

    let employee: EmployeeData = load_employee(persistence, employee_id)?;

    persistence
        .set_employee_active(employee_id, is_active)
        .map_err(translate_persistence_error)?;

    if !is_active {
        let revoked: usize = persistence
            .delete_sessions_for_employee(employee_id)
            .map_err(translate_persistence_error)?;
        debug!(employee_id, revoked, "Revoked sessions of deactivated employee");
    }

    info!(employee_id, is_active, "Changed employee status");

    let label: &str = if is_active { "Activated" } else { "Deactivated" };
    Ok(EmployeeStatusResponse {
        employee_id,
        message: format!("{label} employee: {}", employee.full_name),
        full_name: employee.full_name,
        is_active,
    })
}

/// Deactivates an employee and ends their sessions.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator, the target is
/// the administrator, or the employee does not exist.
pub fn deactivate_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
) -> Result<EmployeeStatusResponse, ApiError> {
    set_employee_active(persistence, actor, employee_id, false)
}

/// Reactivates an employee.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator, the target is
/// the administrator, or the employee does not exist.
pub fn activate_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
) -> Result<EmployeeStatusResponse, ApiError> {
    set_employee_active(persistence, actor, employee_id, true)
}

/// Resets an employee's password to [`DEFAULT_RESET_PASSWORD`].
///
/// Existing sessions for the employee are ended.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator, the target is
/// the administrator, or the employee does not exist.
pub fn reset_password(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
) -> Result<ResetPasswordResponse, ApiError> {
    AuthorizationService::require_admin(actor, "reset_password")?;
    ensure_not_administrator(employee_id, "reset").map_err(translate_domain_error)?;

    let employee: EmployeeData = load_employee(persistence, employee_id)?;

    persistence
        .update_password(employee_id, DEFAULT_RESET_PASSWORD)
        .map_err(translate_persistence_error)?;
    persistence
        .delete_sessions_for_employee(employee_id)
        .map_err(translate_persistence_error)?;

    info!(employee_id, "Reset employee password");

    Ok(ResetPasswordResponse {
        employee_id,
        message: format!(
            "Password reset to '{DEFAULT_RESET_PASSWORD}' for {}",
            employee.full_name
        ),
        full_name: employee.full_name,
        new_password: String::from(DEFAULT_RESET_PASSWORD),
    })
}

/// Lists active employees for filter dropdowns, ordered by name.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator or the query fails.
pub fn list_employee_options(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<EmployeeOptionsResponse, ApiError> {
    AuthorizationService::require_admin(actor, "list_employee_options")?;

    let employees: Vec<EmployeeData> = persistence
        .list_active_employees()
        .map_err(translate_persistence_error)?;

    Ok(EmployeeOptionsResponse {
        options: employees
            .into_iter()
            .map(|e| EmployeeOption {
                employee_id: e.employee_id,
                full_name: e.full_name,
            })
            .collect(),
    })
}

// ============================================================================
// Administrator: reports
// ============================================================================

fn run_report_query(
    persistence: &mut Persistence,
    request: &ReportQueryRequest,
    today: Date,
) -> Result<(DatePreset, ReportFilter, Vec<ReportEntry>), ApiError> {
    let (preset, range): (DatePreset, DateRange) = resolve_range(
        request.preset.as_deref(),
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        today,
    )?;
    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::from_optional(request.employee.as_deref()),
        range,
    };

    let rows: Vec<ReportEntry> = persistence
        .query_reports(&filter)
        .map_err(translate_persistence_error)?;

    Ok((preset, filter, rows))
}

/// Runs the administrator report query and groups the rows.
///
/// Rows are grouped by employee, then by month, each in first-seen order
/// of the date-descending result.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
/// * `request` - Employee and date range selections
/// * `today` - The current date in the configured timezone
///
/// # Errors
///
/// Returns an error if the actor is not the administrator, an input cannot
/// be parsed, or the query fails.
pub fn query_reports(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &ReportQueryRequest,
    today: Date,
) -> Result<ReportQueryResponse, ApiError> {
    AuthorizationService::require_admin(actor, "query_reports")?;

    let (preset, filter, rows): (DatePreset, ReportFilter, Vec<ReportEntry>) =
        run_report_query(persistence, request, today)?;
    let groups: Vec<EmployeeGroup> = group_by_employee(&rows);

    Ok(ReportQueryResponse {
        preset: preset.to_string(),
        start_date: iso_date(filter.range.start())?,
        end_date: iso_date(filter.range.end())?,
        employee: filter.employee.name().map(str::to_string),
        total_reports: rows.len(),
        employees: to_views(&groups)?,
    })
}

/// Renders the filtered reports of a single employee as a PDF.
///
/// The download is named after the employee and the resolved filter range.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not the administrator
/// - The filter does not name exactly one employee
/// - No reports match
/// - Rendering fails
pub fn export_reports_pdf(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &ReportQueryRequest,
    today: Date,
) -> Result<ExportReportsResponse, ApiError> {
    AuthorizationService::require_admin(actor, "export_reports_pdf")?;

    let (_preset, filter, rows): (DatePreset, ReportFilter, Vec<ReportEntry>) =
        run_report_query(persistence, request, today)?;

    let Some(employee_name) = filter.employee.name() else {
        return Err(ApiError::InvalidInput {
            field: String::from("employee"),
            message: String::from("Select a single employee to export reports"),
        });
    };

    let body: Vec<u8> = render_report_document(&rows).map_err(translate_export_error)?;
    let filename: String = export_filename(employee_name, filter.range.start(), filter.range.end())
        .map_err(translate_export_error)?;

    info!(
        employee = %employee_name,
        reports = rows.len(),
        bytes = body.len(),
        "Exported reports"
    );

    Ok(ExportReportsResponse {
        filename,
        content_type: String::from(PDF_CONTENT_TYPE),
        body,
    })
}

// ============================================================================
// Administrator: tasks
// ============================================================================

/// Lists tasks by employee and completion status.
///
/// Ordered by due date with undated tasks last, then newest first.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator, the status is
/// unknown, or the query fails.
pub fn list_tasks(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &TaskQueryRequest,
) -> Result<ListTasksResponse, ApiError> {
    AuthorizationService::require_admin(actor, "list_tasks")?;

    let filter: TaskFilter = TaskFilter {
        employee: EmployeeSelector::from_optional(request.employee.as_deref()),
        status: parse_status(request.status.as_deref())?,
    };
    let tasks: Vec<TaskData> = persistence
        .list_tasks(&filter)
        .map_err(translate_persistence_error)?;

    Ok(ListTasksResponse {
        total: tasks.len(),
        tasks: to_views(&tasks)?,
    })
}

/// Assigns a task to an active employee.
///
/// An explicit due date wins; otherwise `use_default_due_date` selects one
/// week from `today`, and the task is undated when neither is given.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not the administrator
/// - No assignee is given, or it is the administrator
/// - The assignee does not exist or is inactive
/// - The description is blank or the due date cannot be parsed
pub fn create_task(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &CreateTaskRequest,
    today: Date,
) -> Result<CreateTaskResponse, ApiError> {
    AuthorizationService::require_admin(actor, "create_task")?;

    let employee_id: i64 = request.employee_id.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("employee_id"),
        message: String::from("An assignee is required"),
    })?;
    ensure_not_administrator(employee_id, "assigned tasks").map_err(translate_domain_error)?;

    let description: String =
        validate_task_description(&request.task_description).map_err(translate_domain_error)?;

    let due_date: Option<Date> = match parse_optional_date(request.due_date.as_deref())? {
        Some(date) => Some(date),
        None if request.use_default_due_date => Some(
            today
                .checked_add(Duration::days(DEFAULT_DUE_DAYS))
                .ok_or_else(|| ApiError::InvalidInput {
                    field: String::from("due_date"),
                    message: String::from("Default due date is out of range"),
                })?,
        ),
        None => None,
    };

    let employee: EmployeeData = load_employee(persistence, employee_id)?;
    if !employee.is_active {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("active_assignee"),
            message: format!("Cannot assign a task to inactive employee {}", employee.full_name),
        });
    }

    let task_id: i64 = persistence
        .create_task(employee_id, &description, due_date)
        .map_err(translate_persistence_error)?;

    info!(task_id, employee_id, "Assigned task");

    Ok(CreateTaskResponse {
        task_id,
        employee_id,
        due_date: due_date.map(iso_date).transpose()?,
        message: format!("Successfully assigned task to {}", employee.full_name),
        employee_name: employee.full_name,
    })
}

/// Marks a task completed or reopens it.
///
/// Setting the flag it already has is not an error.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator or the task does
/// not exist.
pub fn set_task_completion(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    task_id: i64,
    is_completed: bool,
) -> Result<TaskStatusResponse, ApiError> {
    let action: &str = if is_completed {
        "complete_task"
    } else {
        "reopen_task"
    };
    AuthorizationService::require_admin(actor, action)?;

    persistence
        .set_task_completed(task_id, is_completed)
        .map_err(translate_persistence_error)?;

    info!(task_id, is_completed, "Changed task status");

    Ok(TaskStatusResponse {
        task_id,
        is_completed,
        message: String::from(if is_completed {
            "Task marked as completed"
        } else {
            "Task reopened"
        }),
    })
}

/// Deletes a task.
///
/// # Errors
///
/// Returns an error if the actor is not the administrator or the task does
/// not exist.
pub fn delete_task(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    task_id: i64,
) -> Result<DeleteTaskResponse, ApiError> {
    AuthorizationService::require_admin(actor, "delete_task")?;

    persistence
        .delete_task(task_id)
        .map_err(translate_persistence_error)?;

    info!(task_id, "Deleted task");

    Ok(DeleteTaskResponse {
        task_id,
        message: String::from("Task deleted"),
    })
}

// ============================================================================
// Employee
// ============================================================================

/// Builds the caller's own overview.
///
/// # Errors
///
/// Returns an error if the actor is the administrator or a query fails.
pub fn employee_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee: &EmployeeData,
    today: Date,
) -> Result<EmployeeDashboardResponse, ApiError> {
    AuthorizationService::require_employee(actor, "employee_dashboard")?;

    let data: EmployeeDashboardData = persistence
        .employee_dashboard(actor.employee_id, first_of_month(today)?)
        .map_err(translate_persistence_error)?;

    Ok(EmployeeDashboardResponse {
        full_name: employee.full_name.clone(),
        profile_pic_url: employee.profile_pic_url.clone(),
        total_reports: data.total_reports,
        reports_this_month: data.reports_this_month,
        total_tasks: data.total_tasks,
        pending_tasks: data.pending_tasks,
        latest_reports: to_views(&data.latest_reports)?,
        upcoming_tasks: to_views(&data.upcoming_tasks)?,
    })
}

/// Files the caller's report for a date, overwriting any existing one.
///
/// # Errors
///
/// Returns an error if the actor is the administrator, the text is blank,
/// the date cannot be parsed, or the write fails.
pub fn submit_report(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &SubmitReportRequest,
    today: Date,
) -> Result<SubmitReportResponse, ApiError> {
    AuthorizationService::require_employee(actor, "submit_report")?;

    validate_report_text(&request.report_text).map_err(translate_domain_error)?;
    let report_date: Date = parse_optional_date(request.report_date.as_deref())?.unwrap_or(today);

    let outcome: SubmitOutcome = persistence
        .submit_report(actor.employee_id, report_date, &request.report_text)
        .map_err(translate_persistence_error)?;

    info!(
        employee_id = actor.employee_id,
        report_id = outcome.report_id(),
        created = outcome.was_created(),
        "Submitted report"
    );

    Ok(SubmitReportResponse {
        report_id: outcome.report_id(),
        report_date: iso_date(report_date)?,
        created: outcome.was_created(),
        message: String::from(if outcome.was_created() {
            "Report submitted successfully"
        } else {
            "Report updated successfully"
        }),
    })
}

/// Reports whether the caller already filed a report for a date.
///
/// # Errors
///
/// Returns an error if the actor is the administrator, the date cannot be
/// parsed, or the query fails.
pub fn check_report_date(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &CheckReportRequest,
    today: Date,
) -> Result<CheckReportResponse, ApiError> {
    AuthorizationService::require_employee(actor, "check_report_date")?;

    let report_date: Date = parse_optional_date(request.report_date.as_deref())?.unwrap_or(today);
    let existing: Option<ReportEntry> = persistence
        .find_report_for_date(actor.employee_id, report_date)
        .map_err(translate_persistence_error)?;

    let report: Option<ReportInfo> = existing
        .as_ref()
        .map(ReportInfo::try_from)
        .transpose()
        .map_err(translate_domain_error)?;
    let message: Option<String> = report.as_ref().map(|r| {
        format!(
            "You already have a report for {}. Submitting will update your existing report.",
            r.display_date
        )
    });

    Ok(CheckReportResponse {
        report_date: iso_date(report_date)?,
        exists: report.is_some(),
        message,
        report,
    })
}

/// Lists the caller's reports within a range, grouped by month.
///
/// # Errors
///
/// Returns an error if the actor is the administrator, an input cannot be
/// parsed, or the query fails.
pub fn list_my_reports(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &MyReportsRequest,
    today: Date,
) -> Result<MyReportsResponse, ApiError> {
    AuthorizationService::require_employee(actor, "list_my_reports")?;

    let (preset, range): (DatePreset, DateRange) = resolve_range(
        request.preset.as_deref(),
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        today,
    )?;
    let rows: Vec<ReportEntry> = persistence
        .list_reports_for_employee(actor.employee_id, range)
        .map_err(translate_persistence_error)?;
    let months: Vec<MonthGroup> = group_by_month(&rows).map_err(translate_domain_error)?;

    Ok(MyReportsResponse {
        preset: preset.to_string(),
        start_date: iso_date(range.start())?,
        end_date: iso_date(range.end())?,
        total_reports: rows.len(),
        months: to_views(&months)?,
    })
}

/// Edits one of the caller's reports.
///
/// The write refreshes the report's timestamp.
///
/// # Errors
///
/// Returns an error if the actor is the administrator, the report is not
/// the caller's, or an input is invalid.
pub fn update_my_report(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    report_id: i64,
    request: &UpdateReportRequest,
) -> Result<UpdateReportResponse, ApiError> {
    AuthorizationService::require_employee(actor, "update_my_report")?;

    validate_report_text(&request.report_text).map_err(translate_domain_error)?;
    let report_date: Date = parse_iso_date(request.report_date.trim()).map_err(translate_domain_error)?;

    persistence
        .update_report(report_id, actor.employee_id, report_date, &request.report_text)
        .map_err(translate_persistence_error)?;

    info!(employee_id = actor.employee_id, report_id, "Updated report");

    Ok(UpdateReportResponse {
        report_id,
        report_date: iso_date(report_date)?,
        message: String::from("Report updated successfully"),
    })
}

/// Lists the caller's tasks split into pending and completed.
///
/// # Errors
///
/// Returns an error if the actor is the administrator, the status is
/// unknown, or the query fails.
pub fn list_my_tasks(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &MyTasksRequest,
) -> Result<MyTasksResponse, ApiError> {
    AuthorizationService::require_employee(actor, "list_my_tasks")?;

    let status: TaskStatusFilter = parse_status(request.status.as_deref())?;
    let tasks: Vec<TaskData> = persistence
        .list_tasks_for_employee(actor.employee_id, status)
        .map_err(translate_persistence_error)?;

    let (completed, pending): (Vec<TaskData>, Vec<TaskData>) =
        tasks.into_iter().partition(|t| t.is_completed);

    Ok(MyTasksResponse {
        status: status.to_string(),
        pending: to_views(&pending)?,
        completed: to_views(&completed)?,
    })
}

/// Marks one of the caller's tasks completed.
///
/// # Errors
///
/// Returns an error if the actor is the administrator or the task does not
/// exist or belongs to someone else.
pub fn complete_my_task(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    task_id: i64,
) -> Result<TaskStatusResponse, ApiError> {
    AuthorizationService::require_employee(actor, "complete_my_task")?;

    let task: TaskData = load_task(persistence, task_id)?;
    if task.employee_id != actor.employee_id {
        return Err(ApiError::Unauthorized {
            action: String::from("complete_my_task"),
            required_role: String::from("task owner"),
        });
    }

    persistence
        .set_task_completed(task_id, true)
        .map_err(translate_persistence_error)?;

    info!(employee_id = actor.employee_id, task_id, "Completed own task");

    Ok(TaskStatusResponse {
        task_id,
        is_completed: true,
        message: String::from("Task marked as completed"),
    })
}
