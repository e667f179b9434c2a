// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ALL_TIME_START, DatePreset, DateRange, DomainError, format_iso_date, parse_iso_date,
};
use std::str::FromStr;
use time::Date;
use time::macros::date;

// A Thursday.
const TODAY: Date = date!(2024 - 03 - 14);

fn resolve(preset: DatePreset) -> DateRange {
    DateRange::resolve(preset, None, None, TODAY).unwrap()
}

#[test]
fn test_all_time_starts_at_epoch_floor() {
    let range: DateRange = resolve(DatePreset::AllTime);
    assert_eq!(range.start(), ALL_TIME_START);
    assert_eq!(range.start(), date!(2000 - 01 - 01));
    assert_eq!(range.end(), TODAY);
}

#[test]
fn test_today_is_single_day() {
    let range: DateRange = resolve(DatePreset::Today);
    assert_eq!(range.start(), TODAY);
    assert_eq!(range.end(), TODAY);
}

#[test]
fn test_this_week_starts_on_monday() {
    let range: DateRange = resolve(DatePreset::ThisWeek);
    assert_eq!(range.start(), date!(2024 - 03 - 11));
    assert_eq!(range.end(), TODAY);

    let monday: DateRange =
        DateRange::resolve(DatePreset::ThisWeek, None, None, date!(2024 - 03 - 11)).unwrap();
    assert_eq!(monday.start(), date!(2024 - 03 - 11));

    let sunday: DateRange =
        DateRange::resolve(DatePreset::ThisWeek, None, None, date!(2024 - 03 - 17)).unwrap();
    assert_eq!(sunday.start(), date!(2024 - 03 - 11));
}

#[test]
fn test_this_month_and_year() {
    assert_eq!(resolve(DatePreset::ThisMonth).start(), date!(2024 - 03 - 01));
    assert_eq!(resolve(DatePreset::ThisYear).start(), date!(2024 - 01 - 01));
}

#[test]
fn test_presets_never_invert() {
    for preset in [
        DatePreset::AllTime,
        DatePreset::Today,
        DatePreset::ThisWeek,
        DatePreset::ThisMonth,
        DatePreset::ThisYear,
        DatePreset::Custom,
    ] {
        let range: DateRange = resolve(preset);
        assert!(!range.is_inverted(), "{preset} produced an inverted range");
    }
}

#[test]
fn test_custom_defaults_to_last_thirty_days() {
    let range: DateRange = resolve(DatePreset::Custom);
    assert_eq!(range.start(), date!(2024 - 02 - 13));
    assert_eq!(range.end(), TODAY);
}

#[test]
fn test_custom_inverted_range_is_accepted() {
    let range: DateRange = DateRange::resolve(
        DatePreset::Custom,
        Some(date!(2024 - 02 - 01)),
        Some(date!(2024 - 01 - 01)),
        TODAY,
    )
    .unwrap();
    assert!(range.is_inverted());
    assert!(!range.contains(date!(2024 - 01 - 15)));
}

#[test]
fn test_custom_bounds_ignored_for_named_presets() {
    let range: DateRange = DateRange::resolve(
        DatePreset::Today,
        Some(date!(2020 - 01 - 01)),
        Some(date!(2020 - 12 - 31)),
        TODAY,
    )
    .unwrap();
    assert_eq!(range.start(), TODAY);
}

#[test]
fn test_preset_parsing() {
    assert_eq!(
        DatePreset::from_str("this_week").unwrap(),
        DatePreset::ThisWeek
    );
    assert_eq!(
        DatePreset::from_str("This-Month").unwrap(),
        DatePreset::ThisMonth
    );
    assert_eq!(
        DatePreset::from_str("ALL_TIME").unwrap(),
        DatePreset::AllTime
    );
    assert!(matches!(
        DatePreset::from_str("yesterday"),
        Err(DomainError::InvalidDatePreset(_))
    ));
}

#[test]
fn test_iso_dates() {
    assert_eq!(parse_iso_date("2024-01-05").unwrap(), date!(2024 - 01 - 05));
    assert_eq!(format_iso_date(date!(2024 - 01 - 05)).unwrap(), "2024-01-05");
    assert_eq!(format_iso_date(date!(0999 - 12 - 31)).unwrap(), "0999-12-31");
    assert!(matches!(
        parse_iso_date("05/01/2024"),
        Err(DomainError::DateParseError { .. })
    ));
    assert!(parse_iso_date("2024-02-30").is_err());
}
