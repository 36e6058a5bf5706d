use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::Condition;
use crate::constraint::{Constraint, ConstraintKind};

/// The kind of a field, with its kind-specific options as variant payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Short single-line text.
    String,
    /// Long-form multi-line text.
    Text,
    Url,
    Boolean,
    /// ISO 8601 datetime stored as a string.
    Datetime,
    /// URL path segment derived from another field of the same scope.
    Slug { source: String, max_length: usize },
    Array { of: Box<FieldKind> },
    Object { fields: Vec<FieldDef> },
    /// Identifier of a document of the named type.
    Reference { to: String },
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Url => "url",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Slug { .. } => "slug",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
            Self::Reference { .. } => "reference",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slug { source, max_length } => {
                write!(f, "slug(from {source}, max {max_length})")
            }
            Self::Array { of } => write!(f, "array<{of}>"),
            Self::Object { fields } => write!(f, "object({} fields)", fields.len()),
            Self::Reference { to } => write!(f, "reference<{to}>"),
            other => f.write_str(other.name()),
        }
    }
}

/// A field's default applied when a new document instance is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DefaultValue {
    Fixed { value: Value },
    /// The creation timestamp, evaluated when the instance is created.
    /// Only legal on datetime fields.
    CurrentDatetime,
}

/// One field of a document type (or of a nested object scope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Display label; listings fall back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// The field is hidden while this condition evaluates true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_when: Option<Condition>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            placeholder: None,
            kind,
            constraints: Vec::new(),
            default: None,
            hidden_when: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Datetime)
    }

    pub fn slug(name: impl Into<String>, source: impl Into<String>, max_length: usize) -> Self {
        Self::new(
            name,
            FieldKind::Slug {
                source: source.into(),
                max_length,
            },
        )
    }

    pub fn array(name: impl Into<String>, of: FieldKind) -> Self {
        Self::new(name, FieldKind::Array { of: Box::new(of) })
    }

    pub fn object(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldKind::Object { fields })
    }

    pub fn reference(name: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Reference { to: to.into() })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.constrained(Constraint::new(ConstraintKind::Required))
    }

    #[must_use]
    pub fn max_length(self, limit: usize) -> Self {
        self.constrained(Constraint::new(ConstraintKind::MaxLength { limit }))
    }

    #[must_use]
    pub fn min_length(self, limit: usize) -> Self {
        self.constrained(Constraint::new(ConstraintKind::MinLength { limit }))
    }

    #[must_use]
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.constrained(Constraint::new(ConstraintKind::Pattern {
            pattern: pattern.into(),
        }))
    }

    #[must_use]
    pub fn one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.constrained(Constraint::new(ConstraintKind::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }))
    }

    /// Downgrades the most recently added constraint to warning severity.
    /// No-op when no constraint has been added yet.
    #[must_use]
    pub fn warning(mut self) -> Self {
        if let Some(last) = self.constraints.pop() {
            self.constraints.push(last.warning());
        }
        self
    }

    #[must_use]
    pub fn initial_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Fixed {
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn initial_now(mut self) -> Self {
        self.default = Some(DefaultValue::CurrentDatetime);
        self
    }

    #[must_use]
    pub fn hidden_when(mut self, condition: Condition) -> Self {
        self.hidden_when = Some(condition);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required_constraint().is_some()
    }

    pub fn required_constraint(&self) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|constraint| constraint.kind == ConstraintKind::Required)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
