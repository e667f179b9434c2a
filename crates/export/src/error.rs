// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use office_report_domain::DomainError;
use thiserror::Error;

/// Errors produced while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There were no report rows to render.
    #[error("There are no reports to export")]
    EmptyReport,
    /// The rows belong to more than one employee.
    #[error("Reports from multiple employees cannot share one export ('{first}' and '{other}')")]
    MixedEmployees {
        /// Name on the first row.
        first: String,
        /// The first differing name.
        other: String,
    },
    /// A report date could not be labelled.
    #[error("Failed to label report dates: {0}")]
    DateLabel(#[from] DomainError),
    /// Serializing the document failed.
    #[error("Failed to write PDF output: {0}")]
    Write(#[from] std::io::Error),
}
