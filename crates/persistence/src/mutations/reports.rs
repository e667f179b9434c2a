// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::SubmitOutcome;
use crate::diesel_schema::daily_reports;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;
use crate::queries::encode_date;

/// Files an employee's report for a date, replacing any existing one.
///
/// The lookup and the write happen inside one `BEGIN IMMEDIATE`
/// transaction, so two concurrent submissions for the same employee and
/// date cannot both insert. Overwriting refreshes `created_at`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The report owner
/// * `report_date` - The date the report covers
/// * `report_text` - The validated report body
///
/// # Errors
///
/// Returns an error if the transaction fails; nothing is written in that
/// case.
pub fn submit_report(
    conn: &mut SqliteConnection,
    employee_id: i64,
    report_date: Date,
    report_text: &str,
) -> Result<SubmitOutcome, PersistenceError> {
    let date_text: String = encode_date(report_date)?;

    let outcome: SubmitOutcome = conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let existing: Option<i64> = daily_reports::table
            .filter(daily_reports::employee_id.eq(employee_id))
            .filter(daily_reports::report_date.eq(&date_text))
            .select(daily_reports::report_id)
            .order_by(daily_reports::report_id.asc())
            .first(conn)
            .optional()?;

        if let Some(report_id) = existing {
            diesel::update(daily_reports::table)
                .filter(daily_reports::report_id.eq(report_id))
                .set((
                    daily_reports::report_text.eq(report_text),
                    daily_reports::created_at.eq(current_timestamp()),
                ))
                .execute(conn)?;
            return Ok(SubmitOutcome::Updated(report_id));
        }

        diesel::insert_into(daily_reports::table)
            .values((
                daily_reports::employee_id.eq(employee_id),
                daily_reports::report_date.eq(&date_text),
                daily_reports::report_text.eq(report_text),
            ))
            .execute(conn)?;

        Ok(SubmitOutcome::Created(conn.get_last_insert_rowid()?))
    })?;

    info!(
        employee_id,
        report_id = outcome.report_id(),
        created = outcome.was_created(),
        "Report submitted for {}",
        date_text
    );
    Ok(outcome)
}

/// Edits one of an employee's existing reports.
///
/// Only a row owned by `employee_id` is touched. The timestamp is refreshed.
///
/// # Errors
///
/// Returns `PersistenceError::ReportNotFound` if the report does not exist
/// or belongs to someone else.
pub fn update_report(
    conn: &mut SqliteConnection,
    report_id: i64,
    employee_id: i64,
    report_date: Date,
    report_text: &str,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(daily_reports::table)
        .filter(daily_reports::report_id.eq(report_id))
        .filter(daily_reports::employee_id.eq(employee_id))
        .set((
            daily_reports::report_date.eq(encode_date(report_date)?),
            daily_reports::report_text.eq(report_text),
            daily_reports::created_at.eq(current_timestamp()),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::ReportNotFound(report_id));
    }

    info!(report_id, employee_id, "Report updated");
    Ok(())
}
