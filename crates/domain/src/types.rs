// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of the singleton administrator record.
///
/// The administrator is seeded from configuration on first run and is
/// excluded from every employee listing and filter.
pub const ADMINISTRATOR_ID: i64 = 1;

/// Picture used when an employee is created without one.
pub const DEFAULT_PROFILE_PIC_URL: &str =
    "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";

const MAX_USERNAME_LEN: usize = 50;
const MAX_FULL_NAME_LEN: usize = 100;

/// A validated login name.
///
/// Usernames are trimmed and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a username from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty or longer than
    /// 50 characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUsername(String::from(
                "Username cannot be empty",
            )));
        }
        if trimmed.chars().count() > MAX_USERNAME_LEN {
            return Err(DomainError::InvalidUsername(format!(
                "Username cannot exceed {MAX_USERNAME_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the username.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    /// Creates a full name from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is empty or longer than
    /// 100 characters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidFullName(String::from(
                "Full name cannot be empty",
            )));
        }
        if trimmed.chars().count() > MAX_FULL_NAME_LEN {
            return Err(DomainError::InvalidFullName(format!(
                "Full name cannot exceed {MAX_FULL_NAME_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the full name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion filter applied to task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatusFilter {
    /// Every task regardless of completion.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks only.
    Completed,
}

impl TaskStatusFilter {
    /// Converts this filter to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns whether a task with the given completion flag passes the filter.
    #[must_use]
    pub const fn matches(&self, is_completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !is_completed,
            Self::Completed => is_completed,
        }
    }

    /// The completion flag a query must match, or `None` for all tasks.
    #[must_use]
    pub const fn completion_flag(&self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Pending => Some(false),
            Self::Completed => Some(true),
        }
    }
}

impl FromStr for TaskStatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidTaskStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which employee a report or task listing is restricted to.
///
/// Employees are selected by display name, matching the admin filter
/// dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EmployeeSelector {
    /// No restriction.
    #[default]
    All,
    /// Only rows belonging to the employee with this full name.
    Named(String),
}

impl EmployeeSelector {
    /// Builds a selector from an optional request field.
    ///
    /// Missing or blank names select all employees.
    #[must_use]
    pub fn from_optional(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if !n.is_empty() => Self::Named(n.to_string()),
            _ => Self::All,
        }
    }

    /// The selected name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}
