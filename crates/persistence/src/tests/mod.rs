// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod report_tests;
mod session_tests;
mod task_tests;

use crate::Persistence;
use office_report_domain::DEFAULT_PROFILE_PIC_URL;
use time::Date;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass-1";

/// A fresh database with the administrator seeded.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .ensure_administrator(ADMIN_USERNAME, ADMIN_PASSWORD)
        .unwrap();
    persistence
}

/// Creates an employee with a fixed password and the default picture.
pub fn create_test_employee(persistence: &mut Persistence, username: &str, full_name: &str) -> i64 {
    persistence
        .create_employee(username, "password123", full_name, DEFAULT_PROFILE_PIC_URL)
        .unwrap()
}

pub fn ymd(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, time::Month::try_from(month).unwrap(), day).unwrap()
}
