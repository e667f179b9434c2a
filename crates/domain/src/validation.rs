// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ADMINISTRATOR_ID, DEFAULT_PROFILE_PIC_URL};

/// Validates the body of a daily report.
///
/// The text is stored exactly as submitted; only whitespace-only input is
/// rejected.
///
/// # Errors
///
/// Returns `DomainError::InvalidReportText` if the text is blank.
pub fn validate_report_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidReportText(String::from(
            "Report text cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a task description and returns it trimmed.
///
/// # Errors
///
/// Returns `DomainError::InvalidTaskDescription` if the description is blank.
pub fn validate_task_description(description: &str) -> Result<String, DomainError> {
    let trimmed: &str = description.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTaskDescription(String::from(
            "Task description cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Resolves the picture URL for a new employee.
#[must_use]
pub fn profile_pic_or_default(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => String::from(DEFAULT_PROFILE_PIC_URL),
    }
}

/// Rejects operations that target the administrator record.
///
/// # Arguments
///
/// * `employee_id` - The target of the operation
/// * `action` - Past-tense description used in the error, e.g. "deactivated"
///
/// # Errors
///
/// Returns `DomainError::AdministratorImmutable` if `employee_id` is the
/// administrator.
pub fn ensure_not_administrator(employee_id: i64, action: &str) -> Result<(), DomainError> {
    if employee_id == ADMINISTRATOR_ID {
        return Err(DomainError::AdministratorImmutable(action.to_string()));
    }
    Ok(())
}
