// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use office_report_persistence::{EmployeeData, Persistence};
use time::Date;
use time::macros::date;

use crate::{
    AdminCredentials, AuthenticatedActor, AuthenticationService, CreateEmployeeRequest,
    LoginRequest, create_employee, login,
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass-1";
pub const EMPLOYEE_PASSWORD: &str = "Sunflower9";

/// Thursday, 14 March 2024.
pub const TODAY: Date = date!(2024 - 03 - 14);

pub fn admin_credentials() -> AdminCredentials {
    AdminCredentials::new(ADMIN_USERNAME, ADMIN_PASSWORD)
}

pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .ensure_administrator(ADMIN_USERNAME, ADMIN_PASSWORD)
        .unwrap();
    persistence
}

/// Logs in with `username`/`password` and resolves the session context.
pub fn session_for(
    persistence: &mut Persistence,
    username: &str,
    password: &str,
) -> (AuthenticatedActor, EmployeeData) {
    let request: LoginRequest = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = login(persistence, &admin_credentials(), &request).unwrap();
    AuthenticationService::validate_session(persistence, &response.session_token).unwrap()
}

pub fn admin_session(persistence: &mut Persistence) -> (AuthenticatedActor, EmployeeData) {
    session_for(persistence, ADMIN_USERNAME, ADMIN_PASSWORD)
}

/// Creates an employee through the admin handler with [`EMPLOYEE_PASSWORD`].
pub fn add_employee(persistence: &mut Persistence, username: &str, full_name: &str) -> i64 {
    let (admin, _): (AuthenticatedActor, EmployeeData) = admin_session(persistence);
    create_employee(
        persistence,
        &admin,
        CreateEmployeeRequest {
            username: username.to_string(),
            password: EMPLOYEE_PASSWORD.to_string(),
            full_name: full_name.to_string(),
            profile_pic_url: None,
        },
    )
    .unwrap()
    .employee_id
}

pub fn employee_session(
    persistence: &mut Persistence,
    username: &str,
) -> (AuthenticatedActor, EmployeeData) {
    session_for(persistence, username, EMPLOYEE_PASSWORD)
}
