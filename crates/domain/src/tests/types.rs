// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, EmployeeSelector, FullName, TaskStatusFilter, Username};
use std::str::FromStr;

#[test]
fn test_username_is_trimmed() {
    let username: Username = Username::new("  asha  ").unwrap();
    assert_eq!(username.value(), "asha");
}

#[test]
fn test_username_rejects_blank() {
    let result: Result<Username, DomainError> = Username::new("   ");
    assert!(matches!(result, Err(DomainError::InvalidUsername(_))));
}

#[test]
fn test_username_rejects_overlong() {
    let raw: String = "a".repeat(51);
    assert!(Username::new(&raw).is_err());
    assert!(Username::new(&"a".repeat(50)).is_ok());
}

#[test]
fn test_username_is_case_sensitive() {
    let lower: Username = Username::new("asha").unwrap();
    let upper: Username = Username::new("Asha").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn test_full_name_rejects_blank_and_overlong() {
    assert!(matches!(
        FullName::new(""),
        Err(DomainError::InvalidFullName(_))
    ));
    assert!(FullName::new(&"x".repeat(101)).is_err());
    assert_eq!(FullName::new(" Asha Rao ").unwrap().value(), "Asha Rao");
}

#[test]
fn test_task_status_filter_parsing() {
    assert_eq!(
        TaskStatusFilter::from_str("Pending").unwrap(),
        TaskStatusFilter::Pending
    );
    assert_eq!(
        TaskStatusFilter::from_str("completed").unwrap(),
        TaskStatusFilter::Completed
    );
    assert_eq!(
        TaskStatusFilter::from_str("all").unwrap(),
        TaskStatusFilter::All
    );
    assert!(TaskStatusFilter::from_str("overdue").is_err());
}

#[test]
fn test_task_status_filter_matches() {
    assert!(TaskStatusFilter::All.matches(true));
    assert!(TaskStatusFilter::All.matches(false));
    assert!(TaskStatusFilter::Pending.matches(false));
    assert!(!TaskStatusFilter::Pending.matches(true));
    assert!(TaskStatusFilter::Completed.matches(true));
    assert_eq!(TaskStatusFilter::All.completion_flag(), None);
    assert_eq!(TaskStatusFilter::Pending.completion_flag(), Some(false));
}

#[test]
fn test_employee_selector_from_optional() {
    assert_eq!(EmployeeSelector::from_optional(None), EmployeeSelector::All);
    assert_eq!(
        EmployeeSelector::from_optional(Some("  ")),
        EmployeeSelector::All
    );
    let named: EmployeeSelector = EmployeeSelector::from_optional(Some("Asha Rao"));
    assert_eq!(named.name(), Some("Asha Rao"));
}
