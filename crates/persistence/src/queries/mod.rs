// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every query is expressed in Diesel DSL with bound parameters. Dates are
//! bound and compared as ISO-8601 text.

pub mod dashboard;
pub mod employees;
pub mod reports;
pub mod sessions;
pub mod tasks;

use office_report_domain::{format_iso_date, parse_iso_date};
use time::Date;

use crate::error::PersistenceError;

/// Decodes a stored `YYYY-MM-DD` column value.
pub(crate) fn decode_date(value: &str) -> Result<Date, PersistenceError> {
    parse_iso_date(value).map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))
}

/// Encodes a date for binding against a `YYYY-MM-DD` column.
pub(crate) fn encode_date(date: Date) -> Result<String, PersistenceError> {
    format_iso_date(date).map_err(|e| PersistenceError::QueryFailed(e.to_string()))
}
