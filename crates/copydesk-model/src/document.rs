use serde::{Deserialize, Serialize};

use crate::field::FieldDef;

/// A registered document type: an ordered field list plus the preview
/// configuration used by listings.
///
/// Field order is significant. Visibility conditions may only look at
/// earlier fields, and violations are reported in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentType {
    pub name: String,
    /// Display label; listings fall back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub preview: PreviewSpec,
}

impl DocumentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            fields: Vec::new(),
            preview: PreviewSpec::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_preview(mut self, preview: PreviewSpec) -> Self {
        self.preview = preview;
        self
    }

    /// Looks up a top-level field by name.
    pub fn field_named(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// How listings render a document: which field supplies the title, which
/// the subtitle, and what to show when those fields have no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_field: Option<String>,
    #[serde(default = "PreviewSpec::untitled")]
    pub title_fallback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_field: Option<String>,
    /// Prefix rendered as `label: value` before the subtitle value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_label: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle_fallback: String,
}

impl Default for PreviewSpec {
    fn default() -> Self {
        Self {
            title_field: None,
            title_fallback: Self::untitled(),
            subtitle_field: None,
            subtitle_label: None,
            subtitle_fallback: String::new(),
        }
    }
}

impl PreviewSpec {
    fn untitled() -> String {
        "Untitled".to_string()
    }

    #[must_use]
    pub fn titled(mut self, field: impl Into<String>) -> Self {
        self.title_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn title_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.title_fallback = fallback.into();
        self
    }

    #[must_use]
    pub fn subtitled(mut self, field: impl Into<String>) -> Self {
        self.subtitle_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn subtitle_label(mut self, label: impl Into<String>) -> Self {
        self.subtitle_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn subtitle_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.subtitle_fallback = fallback.into();
        self
    }
}
