// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating domain values or resolving dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A username failed validation.
    InvalidUsername(String),
    /// A full name failed validation.
    InvalidFullName(String),
    /// Report text failed validation.
    InvalidReportText(String),
    /// A task description failed validation.
    InvalidTaskDescription(String),
    /// A date preset name was not recognized.
    InvalidDatePreset(String),
    /// A task status filter name was not recognized.
    InvalidTaskStatus(String),
    /// A date string could not be parsed.
    DateParseError {
        /// The input that failed to parse.
        date_string: String,
        /// The parser's error message.
        error: String,
    },
    /// A date could not be rendered with a format description.
    DateFormatError {
        /// The date that failed to format.
        date: String,
        /// The formatter's error message.
        error: String,
    },
    /// Date arithmetic left the representable range.
    DateArithmeticOverflow {
        /// What was being computed.
        operation: String,
    },
    /// The configured timezone is not a known IANA name.
    InvalidTimezone(String),
    /// The administrator record cannot be the target of this operation.
    AdministratorImmutable(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::InvalidFullName(msg) => write!(f, "Invalid full name: {msg}"),
            Self::InvalidReportText(msg) => write!(f, "Invalid report text: {msg}"),
            Self::InvalidTaskDescription(msg) => write!(f, "Invalid task description: {msg}"),
            Self::InvalidDatePreset(value) => write!(f, "Unknown date range preset '{value}'"),
            Self::InvalidTaskStatus(value) => write!(f, "Unknown task status filter '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { date, error } => {
                write!(f, "Failed to format date '{date}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Unknown timezone '{tz}'"),
            Self::AdministratorImmutable(action) => {
                write!(f, "The administrator account cannot be {action}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
