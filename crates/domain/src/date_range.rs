// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Today-relative date range presets.
//!
//! Every resolution function takes `today` as a parameter; callers obtain
//! it from [`crate::today_in_timezone`] so that tests can pin the calendar.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::{date, format_description};
use time::{Date, Duration, Month};

use crate::formatting::format_date;

/// Storage and wire representation of a calendar date.
const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Earliest date covered by the all-time preset.
pub const ALL_TIME_START: Date = date!(2000 - 01 - 01);

/// Days before today used when a custom range omits its start bound.
pub const DEFAULT_CUSTOM_LOOKBACK_DAYS: i64 = 30;

/// A named interval resolved against the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
    /// From the epoch floor through today.
    #[default]
    AllTime,
    /// Today only.
    Today,
    /// Monday of the current week through today.
    ThisWeek,
    /// First of the current month through today.
    ThisMonth,
    /// January 1 of the current year through today.
    ThisYear,
    /// Caller-supplied bounds.
    Custom,
}

impl DatePreset {
    /// Converts this preset to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllTime => "all_time",
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::ThisYear => "this_year",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for DatePreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "all_time" => Ok(Self::AllTime),
            "today" => Ok(Self::Today),
            "this_week" => Ok(Self::ThisWeek),
            "this_month" => Ok(Self::ThisMonth),
            "this_year" => Ok(Self::ThisYear),
            "custom" => Ok(Self::Custom),
            _ => Err(DomainError::InvalidDatePreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for DatePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inclusive calendar date range.
///
/// No ordering is enforced between the bounds. An inverted range is legal
/// and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Resolves a preset against `today`.
    ///
    /// For [`DatePreset::Custom`] the supplied bounds are used as-is. A
    /// missing start defaults to 30 days before today and a missing end
    /// defaults to today. Bounds supplied for any other preset are ignored.
    ///
    /// # Arguments
    ///
    /// * `preset` - The preset to resolve
    /// * `custom_start` - Start bound for custom ranges
    /// * `custom_end` - End bound for custom ranges
    /// * `today` - The current calendar date
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if a bound falls outside
    /// the representable date range.
    pub fn resolve(
        preset: DatePreset,
        custom_start: Option<Date>,
        custom_end: Option<Date>,
        today: Date,
    ) -> Result<Self, DomainError> {
        let start: Date = match preset {
            DatePreset::AllTime => ALL_TIME_START,
            DatePreset::Today => today,
            DatePreset::ThisWeek => {
                let offset: i64 = i64::from(today.weekday().number_days_from_monday());
                today.checked_sub(Duration::days(offset)).ok_or_else(|| {
                    DomainError::DateArithmeticOverflow {
                        operation: String::from("computing the start of the week"),
                    }
                })?
            }
            DatePreset::ThisMonth => {
                today
                    .replace_day(1)
                    .map_err(|_| DomainError::DateArithmeticOverflow {
                        operation: String::from("computing the start of the month"),
                    })?
            }
            DatePreset::ThisYear => Date::from_calendar_date(today.year(), Month::January, 1)
                .map_err(|_| DomainError::DateArithmeticOverflow {
                    operation: String::from("computing the start of the year"),
                })?,
            DatePreset::Custom => match custom_start {
                Some(start) => start,
                None => today
                    .checked_sub(Duration::days(DEFAULT_CUSTOM_LOOKBACK_DAYS))
                    .ok_or_else(|| DomainError::DateArithmeticOverflow {
                        operation: String::from("computing the default custom start"),
                    })?,
            },
        };

        let end: Date = match preset {
            DatePreset::Custom => custom_end.unwrap_or(today),
            _ => today,
        };

        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns whether `start` is after `end`.
    #[cfg(test)]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether `date` lies within the range.
    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE_FORMAT).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a date as ISO-8601 `YYYY-MM-DD`.
///
/// This is the storage representation; lexical order matches
/// chronological order for years 0 through 9999.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be formatted.
pub fn format_iso_date(date: Date) -> Result<String, DomainError> {
    format_date(date, ISO_DATE_FORMAT)
}
