// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod date_range;
mod error;
mod formatting;
mod grouping;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{parse_timezone, today_in_timezone};
pub use date_range::{
    ALL_TIME_START, DEFAULT_CUSTOM_LOOKBACK_DAYS, DatePreset, DateRange, format_iso_date,
    parse_iso_date,
};
pub use error::DomainError;
pub use formatting::{entry_date_label, month_label, period_date_label, short_date_label};
pub use grouping::{
    EmployeeGroup, MonthGroup, ReportEntry, group_by_employee, group_by_month, report_period,
};
pub use types::{
    ADMINISTRATOR_ID, DEFAULT_PROFILE_PIC_URL, EmployeeSelector, FullName, TaskStatusFilter,
    Username,
};
pub use validation::{
    ensure_not_administrator, profile_pic_or_default, validate_report_text,
    validate_task_description,
};
