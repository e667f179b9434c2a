// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month};

/// Parses an IANA timezone name such as `America/New_York`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// The current calendar date in `tz`.
///
/// # Errors
///
/// Returns an error if the chrono date cannot be represented as a
/// `time::Date`.
pub fn today_in_timezone(tz: Tz) -> Result<Date, DomainError> {
    let local: NaiveDate = Utc::now().with_timezone(&tz).date_naive();
    naive_to_date(local)
}

fn naive_to_date(value: NaiveDate) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("converting {value} to a calendar date"),
    };

    let month_number: u8 = u8::try_from(value.month()).map_err(|_| overflow())?;
    let day: u8 = u8::try_from(value.day()).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;

    Date::from_calendar_date(value.year(), month, day).map_err(|_| overflow())
}
