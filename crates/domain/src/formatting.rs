// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable date labels used by report listings and the PDF export.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;

const MONTH_LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [year]");

const PERIOD_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year]");

const ENTRY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday], [day] [month repr:short] [year]");

const SHORT_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short], [year]");

/// Formats `date` with one of the label descriptions above.
pub(crate) fn format_date(
    date: Date,
    format: &[BorrowedFormatItem<'static>],
) -> Result<String, DomainError> {
    date.format(format).map_err(|e| DomainError::DateFormatError {
        date: date.to_string(),
        error: e.to_string(),
    })
}

/// Month section label, e.g. "January 2024".
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be formatted.
pub fn month_label(date: Date) -> Result<String, DomainError> {
    format_date(date, MONTH_LABEL_FORMAT)
}

/// Date used in period subtitles, e.g. "05 Jan 2024".
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be formatted.
pub fn period_date_label(date: Date) -> Result<String, DomainError> {
    format_date(date, PERIOD_DATE_FORMAT)
}

/// Date heading above each report, e.g. "Friday, 05 Jan 2024".
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be formatted.
pub fn entry_date_label(date: Date) -> Result<String, DomainError> {
    format_date(date, ENTRY_DATE_FORMAT)
}

/// Compact date used on dashboards, e.g. "05 Jan, 2024".
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be formatted.
pub fn short_date_label(date: Date) -> Result<String, DomainError> {
    format_date(date, SHORT_DATE_FORMAT)
}
