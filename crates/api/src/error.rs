// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use office_report_domain::DomainError;
use office_report_export::ExportError;
use office_report_persistence::PersistenceError;

use crate::password_policy::PasswordPolicyError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidUsername(msg) => ApiError::InvalidInput {
            field: String::from("username"),
            message: msg,
        },
        DomainError::InvalidFullName(msg) => ApiError::InvalidInput {
            field: String::from("full_name"),
            message: msg,
        },
        DomainError::InvalidReportText(msg) => ApiError::InvalidInput {
            field: String::from("report_text"),
            message: msg,
        },
        DomainError::InvalidTaskDescription(msg) => ApiError::InvalidInput {
            field: String::from("task_description"),
            message: msg,
        },
        DomainError::InvalidDatePreset(value) => ApiError::InvalidInput {
            field: String::from("preset"),
            message: format!("Unknown date range preset '{value}'"),
        },
        DomainError::InvalidTaskStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown task status filter '{value}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateFormatError { date, error } => ApiError::Internal {
            message: format!("Failed to format date '{date}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::InvalidTimezone(name) => ApiError::Internal {
            message: format!("Unknown timezone '{name}'"),
        },
        DomainError::AdministratorImmutable(action) => ApiError::DomainRuleViolation {
            rule: String::from("administrator_immutable"),
            message: format!("The administrator account cannot be {action}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing records and uniqueness conflicts keep their meaning; everything
/// else is reported as an internal failure.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateUsername(username) => ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message: format!("Username '{username}' already exists"),
        },
        PersistenceError::EmployeeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {id} does not exist"),
        },
        PersistenceError::ReportNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Report"),
            message: format!("Report {id} does not exist"),
        },
        PersistenceError::TaskNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Task"),
            message: format!("Task {id} does not exist"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

/// Translates an export error into an API error.
#[must_use]
pub fn translate_export_error(err: ExportError) -> ApiError {
    match err {
        ExportError::EmptyReport => ApiError::ResourceNotFound {
            resource_type: String::from("Reports"),
            message: String::from("No reports match the selected criteria"),
        },
        ExportError::MixedEmployees { .. } => ApiError::InvalidInput {
            field: String::from("employee"),
            message: err.to_string(),
        },
        ExportError::DateLabel(_) | ExportError::Write(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
