use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    Required,
    MaxLength,
    MinLength,
    Pattern,
    OneOf,
    InvalidType,
    InvalidUrl,
    InvalidDatetime,
    InvalidSlug,
    UnknownField,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MaxLength => "max-length",
            Self::MinLength => "min-length",
            Self::Pattern => "pattern",
            Self::OneOf => "one-of",
            Self::InvalidType => "invalid-type",
            Self::InvalidUrl => "invalid-url",
            Self::InvalidDatetime => "invalid-datetime",
            Self::InvalidSlug => "invalid-slug",
            Self::UnknownField => "unknown-field",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation found in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the offending field (`seo.metaTitle`, `techStack[2]`).
    pub field: String,
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Human-readable message describing the violation.
    pub message: String,
}

impl Violation {
    pub fn error(
        field: impl Into<String>,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(
        field: impl Into<String>,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn with_severity(
        field: impl Into<String>,
        kind: ViolationKind,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            severity,
            message: message.into(),
        }
    }
}

/// Validation outcome for a single document.
///
/// Violations are data, not errors: an empty report means the document
/// conforms to its type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "type")]
    pub type_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}
