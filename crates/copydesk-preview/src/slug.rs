//! Slug derivation from a document's source field.

use copydesk_model::slug::normalize_slug;
use copydesk_model::{DocumentType, FieldKind, SchemaError, ValueMap};
use copydesk_validate::resolve_visibility;
use serde_json::Value;

/// Derives the normalized slug for the named slug field of `doc_type`.
///
/// Returns `Ok(None)` when there is nothing to derive from: the source
/// field is absent, empty, or not a string, or either field is currently
/// hidden. Never fabricates a placeholder. Fails only when `field_name`
/// does not name a slug field of the type.
pub fn derive_slug(
    doc_type: &DocumentType,
    values: &ValueMap,
    field_name: &str,
) -> Result<Option<String>, SchemaError> {
    let field = doc_type
        .field_named(field_name)
        .ok_or_else(|| SchemaError::unknown_field(&doc_type.name, field_name))?;
    let FieldKind::Slug { source, max_length } = &field.kind else {
        return Err(SchemaError::unknown_field(&doc_type.name, field_name));
    };

    let visibility = resolve_visibility(doc_type, values);
    if visibility.is_hidden(field_name) || visibility.is_hidden(source) {
        return Ok(None);
    }

    let Some(Value::String(text)) = values.get(source) else {
        return Ok(None);
    };
    let slug = normalize_slug(text, *max_length);
    if slug.is_empty() {
        return Ok(None);
    }
    Ok(Some(slug))
}
