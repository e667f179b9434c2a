// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily report queries, including the admin report query builder.

use diesel::SqliteConnection;
use diesel::prelude::*;
use office_report_domain::{DateRange, ReportEntry};
use time::Date;
use tracing::debug;

use crate::data_models::ReportFilter;
use crate::diesel_schema::{daily_reports, employees};
use crate::error::PersistenceError;
use crate::queries::{decode_date, encode_date};

/// A report row joined with its author's name.
///
/// Field order matches the select tuple used by every query here.
#[derive(Queryable)]
struct ReportEntryRow {
    report_id: i64,
    employee_id: i64,
    employee_name: String,
    report_date: String,
    report_text: String,
}

impl TryFrom<ReportEntryRow> for ReportEntry {
    type Error = PersistenceError;

    fn try_from(row: ReportEntryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            report_id: row.report_id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            report_date: decode_date(&row.report_date)?,
            report_text: row.report_text,
        })
    }
}

fn decode_rows(rows: Vec<ReportEntryRow>) -> Result<Vec<ReportEntry>, PersistenceError> {
    rows.into_iter().map(ReportEntry::try_from).collect()
}

/// Runs the admin report query.
///
/// Matches reports whose date lies within `filter.range` (inclusive on both
/// ends) and, when an employee is named, whose author's full name equals it
/// exactly. Results are ordered by report date descending, then employee
/// name ascending. An inverted range matches nothing.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn query_reports(
    conn: &mut SqliteConnection,
    filter: &ReportFilter,
) -> Result<Vec<ReportEntry>, PersistenceError> {
    let start: String = encode_date(filter.range.start())?;
    let end: String = encode_date(filter.range.end())?;

    debug!(
        start = %start,
        end = %end,
        employee = ?filter.employee.name(),
        "Querying reports"
    );

    let mut query = daily_reports::table
        .inner_join(employees::table)
        .filter(daily_reports::report_date.between(start, end))
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .order_by((
            daily_reports::report_date.desc(),
            employees::full_name.asc(),
            daily_reports::report_id.desc(),
        ))
        .into_boxed();

    if let Some(name) = filter.employee.name() {
        query = query.filter(employees::full_name.eq(name.to_string()));
    }

    let rows: Vec<ReportEntryRow> = query.load(conn)?;
    debug!("Report query returned {} rows", rows.len());
    decode_rows(rows)
}

/// Lists one employee's reports within a range, newest report date first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn list_reports_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    range: DateRange,
) -> Result<Vec<ReportEntry>, PersistenceError> {
    debug!("Listing reports for employee ID: {}", employee_id);

    let rows: Vec<ReportEntryRow> = daily_reports::table
        .inner_join(employees::table)
        .filter(daily_reports::employee_id.eq(employee_id))
        .filter(
            daily_reports::report_date
                .between(encode_date(range.start())?, encode_date(range.end())?),
        )
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .order_by((
            daily_reports::report_date.desc(),
            daily_reports::report_id.desc(),
        ))
        .load(conn)?;

    decode_rows(rows)
}

/// Finds the report an employee filed for a given date.
///
/// If more than one row exists for the date, the oldest is returned.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn find_report_for_date(
    conn: &mut SqliteConnection,
    employee_id: i64,
    report_date: Date,
) -> Result<Option<ReportEntry>, PersistenceError> {
    let row: Option<ReportEntryRow> = daily_reports::table
        .inner_join(employees::table)
        .filter(daily_reports::employee_id.eq(employee_id))
        .filter(daily_reports::report_date.eq(encode_date(report_date)?))
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .order_by(daily_reports::report_id.asc())
        .first(conn)
        .optional()?;

    row.map(ReportEntry::try_from).transpose()
}

/// Retrieves a single report by ID.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn get_report(
    conn: &mut SqliteConnection,
    report_id: i64,
) -> Result<Option<ReportEntry>, PersistenceError> {
    let row: Option<ReportEntryRow> = daily_reports::table
        .inner_join(employees::table)
        .filter(daily_reports::report_id.eq(report_id))
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .first(conn)
        .optional()?;

    row.map(ReportEntry::try_from).transpose()
}

/// Counts reports, optionally for one employee and from a given date onward.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_reports(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    since: Option<Date>,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let mut query = daily_reports::table
        .select(count(daily_reports::report_id))
        .into_boxed();

    if let Some(id) = employee_id {
        query = query.filter(daily_reports::employee_id.eq(id));
    }
    if let Some(first_day) = since {
        query = query.filter(daily_reports::report_date.ge(encode_date(first_day)?));
    }

    Ok(query.first(conn)?)
}

/// The most recently written reports across all employees.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn recent_reports(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<ReportEntry>, PersistenceError> {
    let rows: Vec<ReportEntryRow> = daily_reports::table
        .inner_join(employees::table)
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .order_by((
            daily_reports::created_at.desc(),
            daily_reports::report_id.desc(),
        ))
        .limit(limit)
        .load(conn)?;

    decode_rows(rows)
}

/// An employee's reports with the latest report dates.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be decoded.
pub fn latest_reports_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    limit: i64,
) -> Result<Vec<ReportEntry>, PersistenceError> {
    let rows: Vec<ReportEntryRow> = daily_reports::table
        .inner_join(employees::table)
        .filter(daily_reports::employee_id.eq(employee_id))
        .select((
            daily_reports::report_id,
            daily_reports::employee_id,
            employees::full_name,
            daily_reports::report_date,
            daily_reports::report_text,
        ))
        .order_by((
            daily_reports::report_date.desc(),
            daily_reports::report_id.desc(),
        ))
        .limit(limit)
        .load(conn)?;

    decode_rows(rows)
}
