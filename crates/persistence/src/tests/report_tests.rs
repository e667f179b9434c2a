// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for report submission and the admin report query.

use super::{create_test_employee, create_test_persistence, ymd};
use crate::diesel_schema::daily_reports;
use crate::{Persistence, PersistenceError, ReportFilter, SubmitOutcome};
use diesel::prelude::*;
use office_report_domain::{DatePreset, DateRange, EmployeeSelector, ReportEntry};

fn all_time(today: time::Date) -> DateRange {
    DateRange::resolve(DatePreset::AllTime, None, None, today).unwrap()
}

fn stored_created_at(persistence: &mut Persistence, report_id: i64) -> String {
    daily_reports::table
        .filter(daily_reports::report_id.eq(report_id))
        .select(daily_reports::created_at)
        .first(&mut persistence.conn)
        .unwrap()
}

fn count_rows(persistence: &mut Persistence) -> i64 {
    daily_reports::table
        .count()
        .get_result(&mut persistence.conn)
        .unwrap()
}

/// Two employees with reports spread over January and February 2024.
fn seed_reports(persistence: &mut Persistence) -> (i64, i64) {
    let asha: i64 = create_test_employee(persistence, "asha", "Asha Rao");
    let ben: i64 = create_test_employee(persistence, "ben", "Ben Ode");

    persistence
        .submit_report(asha, ymd(2024, 1, 5), "Fixed login bug")
        .unwrap();
    persistence
        .submit_report(asha, ymd(2024, 2, 10), "Wrote onboarding docs")
        .unwrap();
    persistence
        .submit_report(ben, ymd(2024, 2, 10), "Deployed release")
        .unwrap();
    persistence
        .submit_report(ben, ymd(2024, 1, 20), "Triaged tickets")
        .unwrap();

    (asha, ben)
}

#[test]
fn test_submit_report_creates_then_updates() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    let first: SubmitOutcome = persistence
        .submit_report(asha, ymd(2024, 1, 5), "Draft")
        .unwrap();
    assert!(first.was_created());

    diesel::update(daily_reports::table)
        .filter(daily_reports::report_id.eq(first.report_id()))
        .set(daily_reports::created_at.eq("2000-01-01 00:00:00"))
        .execute(&mut persistence.conn)
        .unwrap();

    let second: SubmitOutcome = persistence
        .submit_report(asha, ymd(2024, 1, 5), "Fixed login bug")
        .unwrap();
    assert_eq!(second, SubmitOutcome::Updated(first.report_id()));
    assert_eq!(count_rows(&mut persistence), 1);

    let report: ReportEntry = persistence
        .find_report_for_date(asha, ymd(2024, 1, 5))
        .unwrap()
        .unwrap();
    assert_eq!(report.report_text, "Fixed login bug");
    assert_ne!(
        stored_created_at(&mut persistence, first.report_id()),
        "2000-01-01 00:00:00"
    );
}

#[test]
fn test_submit_report_for_other_date_creates_new_row() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    persistence
        .submit_report(asha, ymd(2024, 1, 5), "one")
        .unwrap();
    let outcome: SubmitOutcome = persistence
        .submit_report(asha, ymd(2024, 1, 6), "two")
        .unwrap();

    assert!(outcome.was_created());
    assert_eq!(count_rows(&mut persistence), 2);
}

#[test]
fn test_find_report_for_date_missing() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");
    assert!(
        persistence
            .find_report_for_date(asha, ymd(2024, 1, 5))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_query_reports_all_employees_ordering() {
    let mut persistence: Persistence = create_test_persistence();
    seed_reports(&mut persistence);

    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::All,
        range: all_time(ymd(2024, 3, 1)),
    };
    let rows: Vec<ReportEntry> = persistence.query_reports(&filter).unwrap();

    let summary: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.report_date.to_string(), r.employee_name.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (String::from("2024-02-10"), String::from("Asha Rao")),
            (String::from("2024-02-10"), String::from("Ben Ode")),
            (String::from("2024-01-20"), String::from("Ben Ode")),
            (String::from("2024-01-05"), String::from("Asha Rao")),
        ]
    );
}

#[test]
fn test_query_reports_single_employee_all_time() {
    let mut persistence: Persistence = create_test_persistence();
    let (asha, _) = seed_reports(&mut persistence);

    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::Named(String::from("Asha Rao")),
        range: all_time(ymd(2024, 3, 1)),
    };
    let rows: Vec<ReportEntry> = persistence.query_reports(&filter).unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.employee_id == asha));
    assert_eq!(rows[0].report_date, ymd(2024, 2, 10));
    assert_eq!(rows[1].report_date, ymd(2024, 1, 5));
}

#[test]
fn test_query_reports_range_is_inclusive() {
    let mut persistence: Persistence = create_test_persistence();
    seed_reports(&mut persistence);

    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::All,
        range: DateRange::new(ymd(2024, 1, 5), ymd(2024, 1, 20)),
    };
    let rows: Vec<ReportEntry> = persistence.query_reports(&filter).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_query_reports_inverted_range_is_empty() {
    let mut persistence: Persistence = create_test_persistence();
    seed_reports(&mut persistence);

    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::All,
        range: DateRange::new(ymd(2024, 2, 28), ymd(2024, 1, 1)),
    };
    assert!(persistence.query_reports(&filter).unwrap().is_empty());
}

#[test]
fn test_query_reports_unknown_employee_is_empty() {
    let mut persistence: Persistence = create_test_persistence();
    seed_reports(&mut persistence);

    let filter: ReportFilter = ReportFilter {
        employee: EmployeeSelector::Named(String::from("Nobody")),
        range: all_time(ymd(2024, 3, 1)),
    };
    assert!(persistence.query_reports(&filter).unwrap().is_empty());
}

#[test]
fn test_list_reports_for_employee_in_range() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, ben) = seed_reports(&mut persistence);

    let rows: Vec<ReportEntry> = persistence
        .list_reports_for_employee(ben, DateRange::new(ymd(2024, 2, 1), ymd(2024, 2, 29)))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].report_text, "Deployed release");
}

#[test]
fn test_update_report_only_touches_owner_rows() {
    let mut persistence: Persistence = create_test_persistence();
    let (asha, ben) = seed_reports(&mut persistence);

    let report: ReportEntry = persistence
        .find_report_for_date(asha, ymd(2024, 1, 5))
        .unwrap()
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.update_report(report.report_id, ben, ymd(2024, 1, 5), "hijack");
    assert_eq!(result, Err(PersistenceError::ReportNotFound(report.report_id)));

    persistence
        .update_report(report.report_id, asha, ymd(2024, 1, 6), "Fixed login bug properly")
        .unwrap();
    let updated: ReportEntry = persistence.get_report(report.report_id).unwrap().unwrap();
    assert_eq!(updated.report_date, ymd(2024, 1, 6));
    assert_eq!(updated.report_text, "Fixed login bug properly");
}
