// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidUsername(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid username: test");

    let err: DomainError = DomainError::InvalidFullName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid full name: test");

    let err: DomainError = DomainError::InvalidDatePreset(String::from("yesterday"));
    assert_eq!(format!("{err}"), "Unknown date range preset 'yesterday'");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2024-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2024-13-01': bad month"
    );

    let err: DomainError = DomainError::DateFormatError {
        date: String::from("2024-01-05"),
        error: String::from("insufficient information"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to format date '2024-01-05': insufficient information"
    );

    let err: DomainError = DomainError::AdministratorImmutable(String::from("deactivated"));
    assert_eq!(
        format!("{err}"),
        "The administrator account cannot be deactivated"
    );
}
