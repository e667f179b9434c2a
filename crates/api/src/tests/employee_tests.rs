// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use office_report_domain::{ADMINISTRATOR_ID, DEFAULT_PROFILE_PIC_URL};
use office_report_persistence::{EmployeeData, Persistence};

use crate::tests::helpers::{add_employee, admin_session, create_test_persistence};
use crate::{
    ApiError, AuthenticatedActor, CreateEmployeeRequest, DEFAULT_RESET_PASSWORD,
    EmployeeOptionsResponse, EmployeeStatusResponse, ListEmployeesResponse, ResetPasswordResponse,
    activate_employee, create_employee, deactivate_employee, list_employee_options,
    list_employees, reset_password,
};

fn request(username: &str, password: &str, full_name: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        username: username.to_string(),
        password: password.to_string(),
        full_name: full_name.to_string(),
        profile_pic_url: None,
    }
}

#[test]
fn test_create_employee_uses_default_picture() {
    let mut persistence: Persistence = create_test_persistence();
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let response = create_employee(
        &mut persistence,
        &admin,
        request("asha", "Sunflower9", "Asha Rao"),
    )
    .unwrap();
    assert_eq!(response.message, "Successfully added employee: Asha Rao");

    let stored: EmployeeData = persistence
        .get_employee_by_id(response.employee_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.profile_pic_url, DEFAULT_PROFILE_PIC_URL);
    assert!(stored.is_active);
}

#[test]
fn test_create_employee_missing_fields_are_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let cases: [(CreateEmployeeRequest, &str); 3] = [
        (request("", "Sunflower9", "Asha Rao"), "username"),
        (request("asha", "", "Asha Rao"), "password"),
        (request("asha", "Sunflower9", "   "), "full_name"),
    ];

    for (req, expected_field) in cases {
        match create_employee(&mut persistence, &admin, req) {
            Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected invalid {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_create_employee_duplicate_username() {
    let mut persistence: Persistence = create_test_persistence();
    add_employee(&mut persistence, "asha", "Asha Rao");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let result = create_employee(
        &mut persistence,
        &admin,
        request("asha", "Sunflower9", "Another Asha"),
    );
    assert_eq!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message: String::from("Username 'asha' already exists"),
        }
    );
}

#[test]
fn test_create_employee_enforces_password_policy() {
    let mut persistence: Persistence = create_test_persistence();
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let result = create_employee(&mut persistence, &admin, request("asha", "short", "Asha Rao"));
    assert!(matches!(
        result,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));
}

#[test]
fn test_list_employees_excludes_administrator() {
    let mut persistence: Persistence = create_test_persistence();
    add_employee(&mut persistence, "ben", "Ben Ode");
    add_employee(&mut persistence, "asha", "Asha Rao");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let response: ListEmployeesResponse = list_employees(&mut persistence, &admin).unwrap();
    let names: Vec<&str> = response
        .employees
        .iter()
        .map(|e| e.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Asha Rao", "Ben Ode"]);
    assert!(response
        .employees
        .iter()
        .all(|e| e.employee_id != ADMINISTRATOR_ID));
}

#[test]
fn test_employee_options_list_only_active_employees() {
    let mut persistence: Persistence = create_test_persistence();
    add_employee(&mut persistence, "ben", "Ben Ode");
    let asha: i64 = add_employee(&mut persistence, "asha", "Asha Rao");
    add_employee(&mut persistence, "cora", "Cora Lin");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    deactivate_employee(&mut persistence, &admin, asha).unwrap();

    let response: EmployeeOptionsResponse = list_employee_options(&mut persistence, &admin).unwrap();
    let names: Vec<&str> = response
        .options
        .iter()
        .map(|o| o.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ben Ode", "Cora Lin"]);
}

#[test]
fn test_deactivate_and_activate_employee() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let off: EmployeeStatusResponse = deactivate_employee(&mut persistence, &admin, id).unwrap();
    assert!(!off.is_active);
    assert_eq!(off.message, "Deactivated employee: Asha Rao");

    let on: EmployeeStatusResponse = activate_employee(&mut persistence, &admin, id).unwrap();
    assert!(on.is_active);
    assert_eq!(on.message, "Activated employee: Asha Rao");
    assert!(persistence.get_employee_by_id(id).unwrap().unwrap().is_active);
}

#[test]
fn test_administrator_cannot_be_deactivated_or_reset() {
    let mut persistence: Persistence = create_test_persistence();
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    assert_eq!(
        deactivate_employee(&mut persistence, &admin, ADMINISTRATOR_ID).unwrap_err(),
        ApiError::DomainRuleViolation {
            rule: String::from("administrator_immutable"),
            message: String::from("The administrator account cannot be deactivated"),
        }
    );
    assert!(matches!(
        reset_password(&mut persistence, &admin, ADMINISTRATOR_ID),
        Err(ApiError::DomainRuleViolation { .. })
    ));
}

#[test]
fn test_unknown_employee_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    assert!(matches!(
        deactivate_employee(&mut persistence, &admin, 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_reset_password_reports_new_password() {
    let mut persistence: Persistence = create_test_persistence();
    let id: i64 = add_employee(&mut persistence, "asha", "Asha Rao");
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(&mut persistence);

    let response: ResetPasswordResponse = reset_password(&mut persistence, &admin, id).unwrap();
    assert_eq!(response.new_password, DEFAULT_RESET_PASSWORD);
    assert_eq!(response.message, "Password reset to 'password123' for Asha Rao");
}
