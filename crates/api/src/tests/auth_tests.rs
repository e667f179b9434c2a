// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use office_report_domain::ADMINISTRATOR_ID;
use office_report_persistence::{EmployeeData, Persistence};
use time::macros::datetime;

use crate::tests::helpers::{
    ADMIN_PASSWORD, ADMIN_USERNAME, EMPLOYEE_PASSWORD, TODAY, add_employee, admin_credentials,
    admin_session, create_test_persistence, employee_session,
};
use crate::{
    ApiError, AuthError, AuthenticatedActor, AuthenticationService, INVALID_CREDENTIALS,
    LoginRequest, LoginResponse, Role, SubmitReportRequest, admin_dashboard, deactivate_employee,
    login, logout, reset_password, submit_report, whoami,
};

fn try_login(persistence: &mut Persistence, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    login(
        persistence,
        &admin_credentials(),
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
}

fn assert_generic_failure(result: Result<LoginResponse, ApiError>) {
    assert_eq!(
        result.unwrap_err(),
        ApiError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS)
        }
    );
}

#[test]
fn test_admin_login_uses_configured_credentials() {
    let mut persistence: Persistence = create_test_persistence();

    let response: LoginResponse = try_login(&mut persistence, ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    assert_eq!(response.employee_id, ADMINISTRATOR_ID);
    assert_eq!(response.role, "Admin");
    assert!(response.session_token.starts_with("session_"));

    let (actor, employee): (AuthenticatedActor, EmployeeData) =
        AuthenticationService::validate_session(&mut persistence, &response.session_token).unwrap();
    assert_eq!(actor.role, Role::Admin);
    assert_eq!(employee.employee_id, ADMINISTRATOR_ID);
}

#[test]
fn test_admin_wrong_password_is_generic_failure() {
    let mut persistence: Persistence = create_test_persistence();
    assert_generic_failure(try_login(&mut persistence, ADMIN_USERNAME, "nope"));
}

#[test]
fn test_employee_login_succeeds() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");

    let response: LoginResponse = try_login(&mut persistence, "asha", EMPLOYEE_PASSWORD).unwrap();
    assert_eq!(response.employee_id, id);
    assert_eq!(response.full_name, "Asha Rao");
    assert_eq!(response.role, "Employee");
}

#[test]
fn test_login_failures_share_one_message() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");

    assert_generic_failure(try_login(&mut persistence, "nobody", EMPLOYEE_PASSWORD));
    assert_generic_failure(try_login(&mut persistence, "asha", "wrong-password1"));

    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);
    deactivate_employee(&mut persistence, &admin, id).unwrap();
    assert_generic_failure(try_login(&mut persistence, "asha", EMPLOYEE_PASSWORD));
}

#[test]
fn test_logout_invalidates_session() {
    let mut persistence: Persistence = create_test_persistence();
    let response: LoginResponse = try_login(&mut persistence, ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();

    logout(&mut persistence, &response.session_token).unwrap();

    let result: Result<(AuthenticatedActor, EmployeeData), AuthError> =
        AuthenticationService::validate_session(&mut persistence, &response.session_token);
    assert!(matches!(result, Err(AuthError::AuthenticationFailed { .. })));
}

#[test]
fn test_unknown_token_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<(AuthenticatedActor, EmployeeData), AuthError> =
        AuthenticationService::validate_session(&mut persistence, "session_0_bogus");
    assert_eq!(
        result.unwrap_err(),
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid session token")
        }
    );
}

#[test]
fn test_expired_session_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_session("stale-token", ADMINISTRATOR_ID, "2000-01-01 00:00:00")
        .unwrap();

    let result: Result<(AuthenticatedActor, EmployeeData), AuthError> =
        AuthenticationService::validate_session(&mut persistence, "stale-token");
    assert_eq!(
        result.unwrap_err(),
        AuthError::AuthenticationFailed {
            reason: String::from("Session expired")
        }
    );
}

#[test]
fn test_session_expiry_is_twelve_hours_in_sqlite_format() {
    let expiry: String =
        AuthenticationService::expiry_from(datetime!(2024-03-14 08:30:05 UTC)).unwrap();
    assert_eq!(expiry, "2024-03-14 20:30:05");
}

#[test]
fn test_deactivation_ends_existing_sessions() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");
    let response: LoginResponse = try_login(&mut persistence, "asha", EMPLOYEE_PASSWORD).unwrap();

    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);
    deactivate_employee(&mut persistence, &admin, id).unwrap();

    assert!(AuthenticationService::validate_session(&mut persistence, &response.session_token).is_err());
}

#[test]
fn test_password_reset_ends_sessions_and_changes_password() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");
    let response: LoginResponse = try_login(&mut persistence, "asha", EMPLOYEE_PASSWORD).unwrap();

    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);
    reset_password(&mut persistence, &admin, id).unwrap();

    assert!(AuthenticationService::validate_session(&mut persistence, &response.session_token).is_err());
    assert_generic_failure(try_login(&mut persistence, "asha", EMPLOYEE_PASSWORD));
    assert!(try_login(&mut persistence, "asha", "password123").is_ok());
}

#[test]
fn test_roles_are_enforced() {
    let mut persistence: Persistence = create_test_persistence();
    add_employee(&mut persistence, "asha", "Asha Rao");
    let (employee, _): (AuthenticatedActor, EmployeeData) = employee_session(&mut persistence, "asha");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    assert_eq!(
        admin_dashboard(&mut persistence, &employee).unwrap_err(),
        ApiError::Unauthorized {
            action: String::from("admin_dashboard"),
            required_role: String::from("Admin"),
        }
    );

    let request: SubmitReportRequest = SubmitReportRequest {
        report_date: None,
        report_text: String::from("Did things"),
    };
    assert!(matches!(
        submit_report(&mut persistence, &admin, &request, TODAY),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_whoami_reports_role() {
    let mut persistence: Persistence = create_test_persistence();
    add_employee(&mut persistence, "asha", "Asha Rao");
    let (actor, employee): (AuthenticatedActor, EmployeeData) = employee_session(&mut persistence, "asha");

    let me = whoami(&actor, &employee);
    assert_eq!(me.username, "asha");
    assert_eq!(me.full_name, "Asha Rao");
    assert_eq!(me.role, "Employee");
}
