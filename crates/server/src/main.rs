// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono_tz::Tz;
use clap::Parser;
use office_report_api::{
    AdminCredentials, AdminDashboardResponse, ApiError, CheckReportRequest, CheckReportResponse,
    CreateEmployeeRequest, CreateEmployeeResponse, CreateTaskRequest, CreateTaskResponse,
    DeleteTaskResponse, EmployeeDashboardResponse, EmployeeOptionsResponse,
    EmployeeStatusResponse, ExportReportsResponse, ListEmployeesResponse, ListTasksResponse,
    LoginRequest, LoginResponse, MyReportsRequest, MyReportsResponse, MyTasksRequest,
    MyTasksResponse, ReportQueryRequest, ReportQueryResponse, ResetPasswordResponse,
    SubmitReportRequest, SubmitReportResponse, TaskQueryRequest, TaskStatusResponse,
    UpdateReportRequest, UpdateReportResponse, WhoAmIResponse, activate_employee,
    admin_dashboard, check_report_date, complete_my_task, create_employee, create_task,
    deactivate_employee, delete_task, employee_dashboard, export_reports_pdf,
    list_employee_options, list_employees, list_my_reports, list_my_tasks, list_tasks, login,
    logout, query_reports, reset_password, set_task_completion, submit_report,
    translate_domain_error, update_my_report, whoami,
};
use office_report_domain::{parse_timezone, today_in_timezone};
use office_report_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use time::Date;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::session::{SessionEmployee, bearer_token};

/// Office Report Server - HTTP server for daily reports and task tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "OFFICE_REPORT_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "OFFICE_REPORT_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "OFFICE_REPORT_PORT", default_value_t = 3000)]
    port: u16,

    /// Administrator login name
    #[arg(long, env = "OFFICE_REPORT_ADMIN_USERNAME", default_value = "admin")]
    admin_username: String,

    /// Administrator password
    #[arg(long, env = "OFFICE_REPORT_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: String,

    /// IANA timezone used to decide what "today" is
    #[arg(long, env = "OFFICE_REPORT_TIMEZONE", default_value = "UTC")]
    timezone: String,

    /// Seconds between sweeps of expired sessions
    #[arg(
        long,
        env = "OFFICE_REPORT_SESSION_CLEANUP_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    session_cleanup_secs: u64,
}

/// Application state shared across handlers.
///
/// Holds the single storage handle behind an async mutex, the configured
/// administrator login, and the timezone that defines the current date.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
    admin: Arc<AdminCredentials>,
    timezone: Tz,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Response for actions with nothing else to report.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// The current date in the configured timezone.
fn today(app_state: &AppState) -> Result<Date, HttpError> {
    today_in_timezone(app_state.timezone)
        .map_err(|e| HttpError::from(translate_domain_error(e)))
}

// ============================================================================
// Authentication
// ============================================================================

/// Handler for POST `/auth/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &app_state.admin, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/auth/logout` endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    SessionEmployee(actor, _employee): SessionEmployee,
) -> Result<Json<MessageResponse>, Response> {
    let token: &str = bearer_token(&headers).map_err(IntoResponse::into_response)?;

    let mut persistence = app_state.persistence.lock().await;
    logout(&mut persistence, token).map_err(|e| HttpError::from(e).into_response())?;
    drop(persistence);

    info!(employee_id = actor.employee_id, "Logged out");

    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET `/auth/whoami` endpoint.
#[allow(clippy::unused_async)]
async fn handle_whoami(
    SessionEmployee(actor, employee): SessionEmployee,
) -> Json<WhoAmIResponse> {
    Json(whoami(&actor, &employee))
}

// ============================================================================
// Administrator
// ============================================================================

/// Handler for GET `/admin/dashboard` endpoint.
async fn handle_admin_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
) -> Result<Json<AdminDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AdminDashboardResponse = admin_dashboard(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/employees` endpoint.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListEmployeesResponse = list_employees(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/employees` endpoint.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<CreateEmployeeResponse>, HttpError> {
    info!(username = %req.username, "Handling create_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateEmployeeResponse = create_employee(&mut persistence, &actor, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/employees/options` endpoint.
async fn handle_list_employee_options(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
) -> Result<Json<EmployeeOptionsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeOptionsResponse = list_employee_options(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/employees/{id}/deactivate` endpoint.
async fn handle_deactivate_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeStatusResponse =
        deactivate_employee(&mut persistence, &actor, employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/employees/{id}/activate` endpoint.
async fn handle_activate_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeStatusResponse =
        activate_employee(&mut persistence, &actor, employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/employees/{id}/reset_password` endpoint.
async fn handle_reset_password(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(employee_id): Path<i64>,
) -> Result<Json<ResetPasswordResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ResetPasswordResponse = reset_password(&mut persistence, &actor, employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/reports` endpoint.
async fn handle_query_reports(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<ReportQueryRequest>,
) -> Result<Json<ReportQueryResponse>, HttpError> {
    debug!(?query, "Handling query_reports request");
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ReportQueryResponse = query_reports(&mut persistence, &actor, &query, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/reports/export` endpoint.
///
/// Responds with the rendered PDF as an attachment.
async fn handle_export_reports(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<ReportQueryRequest>,
) -> Result<Response, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let export: ExportReportsResponse =
        export_reports_pdf(&mut persistence, &actor, &query, today)?;
    drop(persistence);

    let disposition: HeaderValue =
        HeaderValue::from_bytes(format!("attachment; filename=\"{}\"", export.filename).as_bytes())
            .map_err(|e| HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Invalid export filename: {e}"),
            })?;
    let content_type: HeaderValue =
        HeaderValue::from_str(&export.content_type).map_err(|e| HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Invalid content type: {e}"),
        })?;

    Ok((
        [(CONTENT_TYPE, content_type), (CONTENT_DISPOSITION, disposition)],
        export.body,
    )
        .into_response())
}

/// Handler for GET `/admin/tasks` endpoint.
async fn handle_list_tasks(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<TaskQueryRequest>,
) -> Result<Json<ListTasksResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListTasksResponse = list_tasks(&mut persistence, &actor, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/tasks` endpoint.
async fn handle_create_task(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTaskResponse = create_task(&mut persistence, &actor, &req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/tasks/{id}/complete` endpoint.
async fn handle_complete_task(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TaskStatusResponse = set_task_completion(&mut persistence, &actor, task_id, true)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/tasks/{id}/reopen` endpoint.
async fn handle_reopen_task(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TaskStatusResponse =
        set_task_completion(&mut persistence, &actor, task_id, false)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/admin/tasks/{id}` endpoint.
async fn handle_delete_task(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(task_id): Path<i64>,
) -> Result<Json<DeleteTaskResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteTaskResponse = delete_task(&mut persistence, &actor, task_id)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Employee
// ============================================================================

/// Handler for GET `/me/dashboard` endpoint.
async fn handle_employee_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, employee): SessionEmployee,
) -> Result<Json<EmployeeDashboardResponse>, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeDashboardResponse =
        employee_dashboard(&mut persistence, &actor, &employee, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/me/reports` endpoint.
async fn handle_list_my_reports(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<MyReportsRequest>,
) -> Result<Json<MyReportsResponse>, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: MyReportsResponse = list_my_reports(&mut persistence, &actor, &query, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/me/reports` endpoint.
async fn handle_submit_report(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Json(req): Json<SubmitReportRequest>,
) -> Result<Json<SubmitReportResponse>, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitReportResponse = submit_report(&mut persistence, &actor, &req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/me/reports/check` endpoint.
async fn handle_check_report(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<CheckReportRequest>,
) -> Result<Json<CheckReportResponse>, HttpError> {
    let today: Date = today(&app_state)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: CheckReportResponse = check_report_date(&mut persistence, &actor, &query, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/me/reports/{id}` endpoint.
async fn handle_update_report(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(report_id): Path<i64>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Json<UpdateReportResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateReportResponse =
        update_my_report(&mut persistence, &actor, report_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/me/tasks` endpoint.
async fn handle_list_my_tasks(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Query(query): Query<MyTasksRequest>,
) -> Result<Json<MyTasksResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MyTasksResponse = list_my_tasks(&mut persistence, &actor, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/me/tasks/{id}/complete` endpoint.
async fn handle_complete_my_task(
    AxumState(app_state): AxumState<AppState>,
    SessionEmployee(actor, _employee): SessionEmployee,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TaskStatusResponse = complete_my_task(&mut persistence, &actor, task_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/whoami", get(handle_whoami))
        .route("/admin/dashboard", get(handle_admin_dashboard))
        .route(
            "/admin/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route("/admin/employees/options", get(handle_list_employee_options))
        .route(
            "/admin/employees/{employee_id}/deactivate",
            post(handle_deactivate_employee),
        )
        .route(
            "/admin/employees/{employee_id}/activate",
            post(handle_activate_employee),
        )
        .route(
            "/admin/employees/{employee_id}/reset_password",
            post(handle_reset_password),
        )
        .route("/admin/reports", get(handle_query_reports))
        .route("/admin/reports/export", get(handle_export_reports))
        .route(
            "/admin/tasks",
            get(handle_list_tasks).post(handle_create_task),
        )
        .route("/admin/tasks/{task_id}", delete(handle_delete_task))
        .route("/admin/tasks/{task_id}/complete", post(handle_complete_task))
        .route("/admin/tasks/{task_id}/reopen", post(handle_reopen_task))
        .route("/me/dashboard", get(handle_employee_dashboard))
        .route(
            "/me/reports",
            get(handle_list_my_reports).post(handle_submit_report),
        )
        .route("/me/reports/check", get(handle_check_report))
        .route("/me/reports/{report_id}", put(handle_update_report))
        .route("/me/tasks", get(handle_list_my_tasks))
        .route("/me/tasks/{task_id}/complete", post(handle_complete_my_task))
        .with_state(app_state)
}

/// Periodically deletes sessions past their expiry.
fn spawn_session_cleanup(persistence: Arc<Mutex<Persistence>>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let mut guard = persistence.lock().await;
            match guard.delete_expired_sessions() {
                Ok(0) => debug!("No expired sessions to remove"),
                Ok(removed) => info!(removed, "Removed expired sessions"),
                Err(e) => warn!(error = %e, "Expired session cleanup failed"),
            }
            drop(guard);
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Office Report Server");

    let timezone: Tz = parse_timezone(&args.timezone)
        .inspect_err(|e| error!(error = %e, "Invalid timezone"))?;

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let opened: Result<Persistence, PersistenceError> = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    };
    let mut persistence: Persistence =
        opened.inspect_err(|e| error!(error = %e, "Failed to open storage"))?;

    if persistence
        .ensure_administrator(&args.admin_username, &args.admin_password)
        .inspect_err(|e| error!(error = %e, "Failed to seed administrator"))?
    {
        info!(username = %args.admin_username, "Created administrator account");
    }

    let persistence: Arc<Mutex<Persistence>> = Arc::new(Mutex::new(persistence));
    spawn_session_cleanup(
        Arc::clone(&persistence),
        Duration::from_secs(args.session_cleanup_secs),
    );

    let app_state: AppState = AppState {
        persistence,
        admin: Arc::new(AdminCredentials::new(
            &args.admin_username,
            &args.admin_password,
        )),
        timezone,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(timezone = %timezone, "Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
