//! Machine-readable validation report payload.
//!
//! The `validate --json` output is versioned so downstream consumers can
//! detect shape changes; bump [`REPORT_SCHEMA_VERSION`] on any breaking
//! change to the serialized form.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use copydesk_model::{ValidationReport, Violation};

/// Identifier of the JSON report shape.
pub const REPORT_SCHEMA: &str = "copydesk.validation-report";
/// Current version of the JSON report shape.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Validation report as emitted by `copydesk validate --json`.
#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    /// RFC 3339 timestamp of when the report was produced.
    pub generated_at: String,
    /// Source path of the validated document, when read from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub violations: Vec<Violation>,
}

impl ReportPayload {
    #[must_use]
    pub fn new(report: &ValidationReport, document: Option<&Path>) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            document: document.map(|path| path.display().to_string()),
            type_name: report.type_name.clone(),
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            violations: report.violations.clone(),
        }
    }
}
