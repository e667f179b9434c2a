// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping of flat report rows for display and export.
//!
//! Groups appear in the order their first member is encountered while
//! scanning the input. Month groups are therefore not necessarily
//! chronological; with rows sorted by date descending the most recent month
//! comes first.

use crate::error::DomainError;
use crate::formatting::month_label;
use std::collections::HashMap;
use time::Date;

/// One report row joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Report identifier.
    pub report_id: i64,
    /// Owning employee.
    pub employee_id: i64,
    /// The owner's full name at query time.
    pub employee_name: String,
    /// The calendar date the report covers.
    pub report_date: Date,
    /// Free-form report body.
    pub report_text: String,
}

/// Reports sharing a calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// Section label, e.g. "January 2024".
    pub label: String,
    /// Reports in input order.
    pub reports: Vec<ReportEntry>,
}

/// Reports belonging to one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeGroup {
    /// The employee's full name.
    pub employee_name: String,
    /// Reports in input order.
    pub reports: Vec<ReportEntry>,
}

impl EmployeeGroup {
    /// Splits this employee's reports by month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateFormatError` if a report date cannot be
    /// labelled.
    pub fn months(&self) -> Result<Vec<MonthGroup>, DomainError> {
        group_by_month(&self.reports)
    }
}

/// Groups rows by employee name in first-seen order.
#[must_use]
pub fn group_by_employee(rows: &[ReportEntry]) -> Vec<EmployeeGroup> {
    let mut groups: Vec<EmployeeGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        if let Some(&position) = index.get(row.employee_name.as_str()) {
            groups[position].reports.push(row.clone());
        } else {
            index.insert(row.employee_name.as_str(), groups.len());
            groups.push(EmployeeGroup {
                employee_name: row.employee_name.clone(),
                reports: vec![row.clone()],
            });
        }
    }

    groups
}

/// Groups rows by month-year label in first-seen order.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if a report date cannot be
/// labelled.
pub fn group_by_month(rows: &[ReportEntry]) -> Result<Vec<MonthGroup>, DomainError> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let label: String = month_label(row.report_date)?;
        if let Some(&position) = index.get(&label) {
            groups[position].reports.push(row.clone());
        } else {
            index.insert(label.clone(), groups.len());
            groups.push(MonthGroup {
                label,
                reports: vec![row.clone()],
            });
        }
    }

    Ok(groups)
}

/// Earliest and latest report dates, or `None` for no rows.
#[must_use]
pub fn report_period(rows: &[ReportEntry]) -> Option<(Date, Date)> {
    let earliest: Date = rows.iter().map(|r| r.report_date).min()?;
    let latest: Date = rows.iter().map(|r| r.report_date).max()?;
    Some((earliest, latest))
}
