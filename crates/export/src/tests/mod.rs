// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod pdf_tests;

use office_report_domain::ReportEntry;
use time::Date;

pub fn entry(id: i64, name: &str, report_date: Date, text: &str) -> ReportEntry {
    ReportEntry {
        report_id: id,
        employee_id: 2,
        employee_name: name.to_string(),
        report_date,
        report_text: text.to_string(),
    }
}

/// Lossy text view of a rendered document for substring checks.
pub fn as_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
