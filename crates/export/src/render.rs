// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Layout of the per-employee report document.

use office_report_domain::{
    ReportEntry, entry_date_label, group_by_month, period_date_label, report_period,
};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::fonts::Font;
use crate::pdf::{Align, Color, PdfWriter, TextStyle};

const TITLE: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 16.0,
    color: Color::BLACK,
};

const PERIOD: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 10.0,
    color: Color::GRAY,
};

const MONTH_HEADING: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 14.0,
    color: Color::BLACK,
};

const ENTRY_DATE: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 11.0,
    color: Color::BLUE,
};

const ENTRY_BODY: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 10.0,
    color: Color::BLACK,
};

const TITLE_GAP: f64 = 24.0;
const PERIOD_GAP: f64 = 20.0;
const MONTH_HEADING_GAP: f64 = 10.0;
const BODY_INDENT: f64 = 10.0;
const ENTRY_GAP: f64 = 12.0;
const MONTH_GAP: f64 = 10.0;

/// Renders one employee's reports as a PDF document.
///
/// The document opens with a centered "Work Reports: {name}" title and the
/// covered period, then lists the reports under month headings in the order
/// they are given. Each entry shows its date in blue followed by the
/// indented report text.
///
/// # Arguments
///
/// * `reports` - The rows to render, all belonging to one employee
///
/// # Errors
///
/// Returns an error if `reports` is empty, mixes employees, or the document
/// cannot be serialized.
pub fn render_report_document(reports: &[ReportEntry]) -> Result<Vec<u8>, ExportError> {
    let first: &ReportEntry = reports.first().ok_or(ExportError::EmptyReport)?;
    if let Some(other) = reports
        .iter()
        .find(|r| r.employee_name != first.employee_name)
    {
        return Err(ExportError::MixedEmployees {
            first: first.employee_name.clone(),
            other: other.employee_name.clone(),
        });
    }
    let (start, end) = report_period(reports).ok_or(ExportError::EmptyReport)?;

    debug!(
        employee = %first.employee_name,
        reports = reports.len(),
        "Rendering report document"
    );

    let mut pdf: PdfWriter = PdfWriter::new();
    pdf.paragraph(
        &format!("Work Reports: {}", first.employee_name),
        TITLE,
        Align::Center,
        0.0,
    )
    .space(TITLE_GAP)
    .paragraph(
        &format!(
            "Period: {} to {}",
            period_date_label(start)?,
            period_date_label(end)?
        ),
        PERIOD,
        Align::Center,
        0.0,
    )
    .space(PERIOD_GAP);

    for month in group_by_month(reports)? {
        // Keep a heading on the same page as its first entry.
        pdf.ensure_space(
            MONTH_HEADING.leading() + MONTH_HEADING_GAP + ENTRY_DATE.leading() + ENTRY_BODY.leading(),
        )
        .paragraph(&month.label, MONTH_HEADING, Align::Left, 0.0)
        .space(MONTH_HEADING_GAP);

        for report in &month.reports {
            pdf.ensure_space(ENTRY_DATE.leading() + ENTRY_BODY.leading())
                .paragraph(
                    &entry_date_label(report.report_date)?,
                    ENTRY_DATE,
                    Align::Left,
                    0.0,
                )
                .paragraph(&report.report_text, ENTRY_BODY, Align::Left, BODY_INDENT)
                .space(ENTRY_GAP);
        }

        pdf.space(MONTH_GAP);
    }

    let pages: usize = pdf.page_count();
    let bytes: Vec<u8> = pdf.finish()?;
    info!(
        employee = %first.employee_name,
        pages,
        bytes = bytes.len(),
        "Rendered report document"
    );
    Ok(bytes)
}
