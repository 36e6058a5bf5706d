//! Listing preview composition.

use copydesk_model::value::display_string;
use copydesk_model::{DocumentType, ValueMap};
use copydesk_validate::{VisibilityMap, resolve_visibility};
use serde::{Deserialize, Serialize};

/// What a document listing shows for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub title: String,
    pub subtitle: String,
}

/// Composes the listing preview for one document snapshot.
///
/// Unset, empty, and hidden fields degrade to the type's configured
/// fallbacks; composition never fails.
pub fn compose_preview(doc_type: &DocumentType, values: &ValueMap) -> Preview {
    let spec = &doc_type.preview;
    let visibility = resolve_visibility(doc_type, values);

    let title = visible_text(spec.title_field.as_deref(), values, &visibility)
        .unwrap_or_else(|| spec.title_fallback.clone());

    let subtitle = visible_text(spec.subtitle_field.as_deref(), values, &visibility)
        .map(|text| match &spec.subtitle_label {
            Some(label) => format!("{label}: {text}"),
            None => text,
        })
        .unwrap_or_else(|| spec.subtitle_fallback.clone());

    Preview { title, subtitle }
}

fn visible_text(
    field: Option<&str>,
    values: &ValueMap,
    visibility: &VisibilityMap,
) -> Option<String> {
    let field = field?;
    if visibility.is_hidden(field) {
        return None;
    }
    values.get(field).and_then(display_string)
}
