// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PDF export of daily reports.
//!
//! A document covers a single employee: a title, the covered period and the
//! reports grouped under month headings.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod fonts;
mod pdf;
mod render;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use fonts::Font;
pub use pdf::{Align, Color, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PdfWriter, TextStyle, wrap_text};
pub use render::render_report_document;

use office_report_domain::format_iso_date;
use time::Date;

/// Content type of an exported document.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Download filename for an employee's export.
///
/// Produces `{employee}_reports_{start}_to_{end}.pdf` with ISO dates.
/// Quotes, slashes, backslashes and control characters in the name are
/// replaced with underscores so the result is safe inside a
/// `Content-Disposition` header.
///
/// # Arguments
///
/// * `employee` - The employee's full name
/// * `start` - Start of the resolved filter range
/// * `end` - End of the resolved filter range
///
/// # Errors
///
/// Returns `ExportError::DateLabel` if a bound cannot be formatted.
pub fn export_filename(employee: &str, start: Date, end: Date) -> Result<String, ExportError> {
    let safe_name: String = employee
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    Ok(format!(
        "{safe_name}_reports_{}_to_{}.pdf",
        format_iso_date(start)?,
        format_iso_date(end)?
    ))
}
