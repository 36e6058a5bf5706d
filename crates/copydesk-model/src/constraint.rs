use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Error
    }
}

/// One declared rule on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ConstraintKind {
    /// The field must have a non-empty value when visible.
    Required,
    MaxLength { limit: usize },
    MinLength { limit: usize },
    /// The whole value must match the regular expression.
    Pattern { pattern: String },
    /// The value must be one of the listed values.
    OneOf { values: Vec<Value> },
}

impl ConstraintKind {
    /// Short label for listings, e.g. `max length 96`.
    pub fn describe(&self) -> String {
        match self {
            Self::Required => "required".to_string(),
            Self::MaxLength { limit } => format!("max length {limit}"),
            Self::MinLength { limit } => format!("min length {limit}"),
            Self::Pattern { pattern } => format!("pattern {pattern}"),
            Self::OneOf { values } => {
                let listed: Vec<String> = values.iter().map(list_entry).collect();
                format!("one of {}", listed.join(", "))
            }
        }
    }
}

/// A constraint and the severity its violations report at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(flatten)]
    pub kind: ConstraintKind,
    #[serde(default)]
    pub severity: Severity,
}

impl Constraint {
    pub fn new(kind: ConstraintKind) -> Self {
        Self {
            kind,
            severity: Severity::Error,
        }
    }

    /// Downgrades the constraint so violations report as warnings.
    #[must_use]
    pub fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }
}

/// Renders a value for "allowed values" listings, without JSON quoting
/// around plain strings.
pub(crate) fn list_entry(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_defaults_to_error() {
        let constraint: Constraint = serde_json::from_value(json!({"rule": "required"})).unwrap();
        assert_eq!(constraint.severity, Severity::Error);
        assert_eq!(constraint.kind, ConstraintKind::Required);
    }

    #[test]
    fn warning_downgrade() {
        let constraint = Constraint::new(ConstraintKind::MinLength { limit: 10 }).warning();
        assert_eq!(constraint.severity, Severity::Warning);
    }

    #[test]
    fn describes_one_of() {
        let kind = ConstraintKind::OneOf {
            values: vec![json!("frontend"), json!("fullstack"), json!("dataAnalysis")],
        };
        assert_eq!(kind.describe(), "one of frontend, fullstack, dataAnalysis");
    }

    #[test]
    fn serializes_with_rule_tag() {
        let constraint = Constraint::new(ConstraintKind::MaxLength { limit: 96 });
        let json = serde_json::to_value(&constraint).unwrap();
        assert_eq!(
            json,
            json!({"rule": "max-length", "limit": 96, "severity": "error"})
        );
    }
}
