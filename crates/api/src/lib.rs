// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Office Report system.
//!
//! Sits between the HTTP server and storage: authenticates sessions,
//! enforces the administrator/employee split, validates requests and
//! translates domain, persistence and export failures into `ApiError`.

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

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AdminCredentials, AuthenticatedActor, AuthenticationService, AuthorizationService,
    INVALID_CREDENTIALS, Role,
};
pub use error::{
    ApiError, AuthError, translate_domain_error, translate_export_error,
    translate_persistence_error,
};
pub use handlers::{
    DEFAULT_DUE_DAYS, DEFAULT_RESET_PASSWORD, activate_employee, admin_dashboard,
    check_report_date, complete_my_task, create_employee, create_task, deactivate_employee,
    delete_task, employee_dashboard, export_reports_pdf, list_employee_options, list_employees,
    list_my_reports, list_my_tasks, list_tasks, login, logout, query_reports, reset_password,
    set_task_completion, submit_report, update_my_report, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AdminDashboardResponse, CheckReportRequest, CheckReportResponse, CreateEmployeeRequest,
    CreateEmployeeResponse, CreateTaskRequest, CreateTaskResponse, DeleteTaskResponse,
    EmployeeDashboardResponse, EmployeeInfo, EmployeeOption, EmployeeOptionsResponse,
    EmployeeReportsInfo, EmployeeStatusResponse, ExportReportsResponse, ListEmployeesResponse,
    ListTasksResponse, LoginRequest, LoginResponse, MonthReportsInfo, MyReportsRequest,
    MyReportsResponse, MyTasksRequest, MyTasksResponse, ReportInfo, ReportQueryRequest,
    ReportQueryResponse, ResetPasswordResponse, SubmitReportRequest, SubmitReportResponse,
    TaskInfo, TaskQueryRequest, TaskStatusResponse, UpdateReportRequest, UpdateReportResponse,
    WhoAmIResponse,
};
