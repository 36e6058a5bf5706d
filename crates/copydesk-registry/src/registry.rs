use std::collections::{BTreeMap, BTreeSet};

use copydesk_model::value::{join_path, json_type_name};
use copydesk_model::{
    Condition, ConstraintKind, DefaultValue, DocumentType, FieldDef, FieldKind, SchemaError,
    ValueMap,
};
use regex::Regex;
use serde_json::Value;

use crate::defaults::instance_defaults;

/// All registered document types, verified at registration time.
///
/// The registry is built once at startup and never mutated afterwards;
/// every lookup hands out shared references.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: BTreeMap<String, DocumentType>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifies and registers a document type. The first problem found is
    /// returned and the registry is left unchanged.
    pub fn register(&mut self, doc_type: DocumentType) -> Result<(), SchemaError> {
        if !is_valid_identifier(&doc_type.name) {
            return Err(SchemaError::InvalidTypeName {
                name: doc_type.name.clone(),
            });
        }
        if self.types.contains_key(&doc_type.name) {
            return Err(SchemaError::DuplicateType {
                name: doc_type.name.clone(),
            });
        }
        verify_scope(&doc_type.name, "", &doc_type.fields)?;
        verify_preview(&doc_type)?;

        self.types.insert(doc_type.name.clone(), doc_type);
        Ok(())
    }

    pub fn register_all(
        &mut self,
        types: impl IntoIterator<Item = DocumentType>,
    ) -> Result<(), SchemaError> {
        for doc_type in types {
            self.register(doc_type)?;
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&DocumentType, SchemaError> {
        self.types.get(name).ok_or_else(|| SchemaError::UnknownType {
            name: name.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&DocumentType> {
        self.types.get(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Fresh values for a new document of the named type, with every
    /// declared default applied.
    pub fn new_instance(&self, name: &str) -> Result<ValueMap, SchemaError> {
        Ok(instance_defaults(self.lookup(name)?))
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Verifies one field scope. Fields are checked in declaration order, each
/// field completely before the next, recursing into nested object scopes.
fn verify_scope(type_name: &str, prefix: &str, fields: &[FieldDef]) -> Result<(), SchemaError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for (position, field) in fields.iter().enumerate() {
        let path = join_path(prefix, &field.name);
        if !is_valid_identifier(&field.name) {
            return Err(SchemaError::InvalidFieldName {
                type_name: type_name.to_string(),
                field: path,
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                type_name: type_name.to_string(),
                field: path,
            });
        }
        if let Some(condition) = &field.hidden_when {
            verify_references(type_name, &path, condition, fields, position)?;
        }
        verify_kind(type_name, &path, &field.name, &field.kind, fields)?;
        for constraint in &field.constraints {
            if let ConstraintKind::Pattern { pattern } = &constraint.kind
                && let Err(error) = Regex::new(pattern)
            {
                return Err(SchemaError::InvalidPattern {
                    type_name: type_name.to_string(),
                    field: path,
                    message: error.to_string(),
                });
            }
        }
        verify_default(type_name, &path, field)?;
    }
    Ok(())
}

/// Visibility conditions may only read fields declared earlier in the same
/// scope, which keeps single-pass resolution order-independent.
fn verify_references(
    type_name: &str,
    field_path: &str,
    condition: &Condition,
    fields: &[FieldDef],
    position: usize,
) -> Result<(), SchemaError> {
    for reference in condition.referenced_fields() {
        match fields.iter().position(|sibling| sibling.name == reference) {
            Some(declared) if declared < position => {}
            Some(_) => {
                return Err(SchemaError::ForwardReference {
                    type_name: type_name.to_string(),
                    field: field_path.to_string(),
                    reference: reference.to_string(),
                });
            }
            None => {
                return Err(SchemaError::unknown_field(type_name, reference));
            }
        }
    }
    Ok(())
}

fn verify_kind(
    type_name: &str,
    path: &str,
    field_name: &str,
    kind: &FieldKind,
    siblings: &[FieldDef],
) -> Result<(), SchemaError> {
    match kind {
        FieldKind::Slug { source, .. } => {
            if source == field_name {
                return Err(SchemaError::InvalidDefinition {
                    type_name: type_name.to_string(),
                    field: path.to_string(),
                    message: "slug source must name another field".to_string(),
                });
            }
            if !siblings.iter().any(|sibling| sibling.name == *source) {
                return Err(SchemaError::unknown_field(type_name, source.as_str()));
            }
        }
        FieldKind::Object { fields } => {
            verify_scope(type_name, path, fields)?;
        }
        FieldKind::Array { of } => {
            verify_element_kind(type_name, path, of)?;
        }
        _ => {}
    }
    Ok(())
}

fn verify_element_kind(type_name: &str, path: &str, kind: &FieldKind) -> Result<(), SchemaError> {
    match kind {
        FieldKind::Slug { .. } => Err(SchemaError::InvalidDefinition {
            type_name: type_name.to_string(),
            field: path.to_string(),
            message: "slug is not a valid array element kind".to_string(),
        }),
        FieldKind::Object { fields } => {
            verify_scope(type_name, &format!("{path}[]"), fields)
        }
        FieldKind::Array { of } => verify_element_kind(type_name, path, of),
        _ => Ok(()),
    }
}

fn verify_default(type_name: &str, path: &str, field: &FieldDef) -> Result<(), SchemaError> {
    let Some(default) = &field.default else {
        return Ok(());
    };
    match default {
        DefaultValue::CurrentDatetime => {
            if field.kind != FieldKind::Datetime {
                return Err(SchemaError::InvalidDefault {
                    type_name: type_name.to_string(),
                    field: path.to_string(),
                    message: format!(
                        "current-datetime default requires a datetime field, not {}",
                        field.kind.name()
                    ),
                });
            }
            Ok(())
        }
        DefaultValue::Fixed { value } => verify_fixed_default(type_name, path, field, value),
    }
}

fn verify_fixed_default(
    type_name: &str,
    path: &str,
    field: &FieldDef,
    value: &Value,
) -> Result<(), SchemaError> {
    let fits = match &field.kind {
        FieldKind::String
        | FieldKind::Text
        | FieldKind::Url
        | FieldKind::Datetime
        | FieldKind::Slug { .. }
        | FieldKind::Reference { .. } => value.is_string(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Array { .. } => value.is_array(),
        FieldKind::Object { .. } => value.is_object(),
    };
    if !fits {
        return Err(SchemaError::InvalidDefault {
            type_name: type_name.to_string(),
            field: path.to_string(),
            message: format!(
                "{} default does not fit a {} field",
                json_type_name(value),
                field.kind.name()
            ),
        });
    }
    for constraint in &field.constraints {
        if let ConstraintKind::OneOf { values } = &constraint.kind
            && !values.contains(value)
        {
            return Err(SchemaError::InvalidDefault {
                type_name: type_name.to_string(),
                field: path.to_string(),
                message: "default is not one of the allowed values".to_string(),
            });
        }
    }
    Ok(())
}

fn verify_preview(doc_type: &DocumentType) -> Result<(), SchemaError> {
    let preview = &doc_type.preview;
    for field in [&preview.title_field, &preview.subtitle_field]
        .into_iter()
        .flatten()
    {
        if doc_type.field_named(field).is_none() {
            return Err(SchemaError::unknown_field(&doc_type.name, field.as_str()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_shapes() {
        assert!(is_valid_identifier("project"));
        assert!(is_valid_identifier("_draft"));
        assert!(is_valid_identifier("reportUrl2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("9lives"));
        assert!(!is_valid_identifier("meta title"));
        assert!(!is_valid_identifier("país"));
    }
}
