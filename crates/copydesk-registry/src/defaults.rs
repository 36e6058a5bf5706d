use chrono::Utc;
use copydesk_model::{DefaultValue, DocumentType, FieldDef, FieldKind, ValueMap};
use serde_json::Value;

/// Fresh values for a new document of this type.
///
/// Every field with a declared default contributes a value; `current-datetime`
/// defaults are stamped now, at instance creation. Object fields without a
/// default of their own still collect their nested defaults; the nested map
/// is inserted only when non-empty.
pub fn instance_defaults(doc_type: &DocumentType) -> ValueMap {
    scope_defaults(&doc_type.fields)
}

fn scope_defaults(fields: &[FieldDef]) -> ValueMap {
    let mut values = ValueMap::new();
    for field in fields {
        match &field.default {
            Some(DefaultValue::Fixed { value }) => {
                values.insert(field.name.clone(), value.clone());
            }
            Some(DefaultValue::CurrentDatetime) => {
                values.insert(field.name.clone(), Value::String(Utc::now().to_rfc3339()));
            }
            None => {
                if let FieldKind::Object { fields: nested } = &field.kind {
                    let nested_values = scope_defaults(nested);
                    if !nested_values.is_empty() {
                        values.insert(field.name.clone(), Value::Object(nested_values));
                    }
                }
            }
        }
    }
    values
}

/// Fills only top-level keys that are missing or null; existing values are
/// never overwritten.
pub fn merge_defaults(doc_type: &DocumentType, values: &mut ValueMap) {
    for (key, default) in instance_defaults(doc_type) {
        if values.get(&key).is_none_or(Value::is_null) {
            values.insert(key, default);
        }
    }
}
