//! Conditional field visibility.
//!
//! A field is hidden while its `hidden_when` condition evaluates true
//! against the sibling values of its own scope. Hidden fields are exempt
//! from validation and never surface in slugs or previews, but their
//! stored values still feed sibling conditions.

use std::collections::BTreeSet;

use copydesk_model::value::join_path;
use copydesk_model::{DocumentType, FieldDef, ValueMap};
use serde_json::Value;

/// The hidden field paths of one document, dotted for nested scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    hidden: BTreeSet<String>,
}

impl VisibilityMap {
    /// True for a hidden field or for any path beneath a hidden ancestor.
    pub fn is_hidden(&self, path: &str) -> bool {
        let mut end = 0;
        for segment in path.split('.') {
            end += segment.len();
            if self.hidden.contains(&path[..end]) {
                return true;
            }
            end += 1;
        }
        false
    }

    pub fn hidden_paths(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }
}

/// Evaluates every visibility condition of the type against `values`.
///
/// Scopes resolve independently: nested object fields see only the nested
/// value map. A hidden object is recorded once; its subtree is not
/// descended.
pub fn resolve_visibility(doc_type: &DocumentType, values: &ValueMap) -> VisibilityMap {
    let mut map = VisibilityMap::default();
    resolve_scope(&doc_type.fields, values, "", &mut map);
    map
}

fn resolve_scope(fields: &[FieldDef], values: &ValueMap, prefix: &str, out: &mut VisibilityMap) {
    let empty = ValueMap::new();
    for field in fields {
        let path = join_path(prefix, &field.name);
        if hides(field, values) {
            out.hidden.insert(path);
            continue;
        }
        if let copydesk_model::FieldKind::Object { fields: nested } = &field.kind {
            let nested_values = match values.get(&field.name) {
                Some(Value::Object(entries)) => entries,
                _ => &empty,
            };
            resolve_scope(nested, nested_values, &path, out);
        }
    }
}

fn hides(field: &FieldDef, siblings: &ValueMap) -> bool {
    field
        .hidden_when
        .as_ref()
        .is_some_and(|condition| condition.evaluate(siblings))
}

/// Hidden field names of a single scope, for callers that already walk
/// scopes themselves.
pub(crate) fn hidden_in_scope<'a>(fields: &'a [FieldDef], values: &ValueMap) -> BTreeSet<&'a str> {
    fields
        .iter()
        .filter(|field| hides(field, values))
        .map(|field| field.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use copydesk_model::Condition;
    use serde_json::json;

    fn project_like() -> DocumentType {
        DocumentType::new("project")
            .field(FieldDef::string("type"))
            .field(
                FieldDef::url("reportUrl")
                    .hidden_when(Condition::not_equals("type", "dataAnalysis")),
            )
            .field(
                FieldDef::array("insights", copydesk_model::FieldKind::String)
                    .hidden_when(Condition::not_equals("type", "dataAnalysis")),
            )
    }

    fn values(json: Value) -> ValueMap {
        match json {
            Value::Object(entries) => entries,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn hidden_until_discriminator_matches() {
        let doc_type = project_like();

        let map = resolve_visibility(&doc_type, &values(json!({"type": "frontend"})));
        assert!(map.is_hidden("reportUrl"));
        assert!(map.is_hidden("insights"));
        assert!(!map.is_hidden("type"));

        let map = resolve_visibility(&doc_type, &values(json!({"type": "dataAnalysis"})));
        assert!(map.is_empty());
    }

    #[test]
    fn absent_discriminator_hides_dependents() {
        let map = resolve_visibility(&project_like(), &ValueMap::new());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn nested_scope_sees_only_nested_values() {
        let doc_type = DocumentType::new("page").field(FieldDef::object(
            "seo",
            vec![
                FieldDef::boolean("noIndex"),
                FieldDef::string("metaTitle").hidden_when(Condition::equals("noIndex", true)),
            ],
        ));

        let map = resolve_visibility(
            &doc_type,
            &values(json!({"seo": {"noIndex": true, "metaTitle": "ignored"}})),
        );
        assert!(map.is_hidden("seo.metaTitle"));
        assert!(!map.is_hidden("seo.noIndex"));
    }

    #[test]
    fn hidden_object_covers_its_subtree() {
        let doc_type = DocumentType::new("page")
            .field(FieldDef::boolean("bare"))
            .field(
                FieldDef::object("seo", vec![FieldDef::string("metaTitle")])
                    .hidden_when(Condition::equals("bare", true)),
            );

        let map = resolve_visibility(&doc_type, &values(json!({"bare": true})));
        assert!(map.is_hidden("seo"));
        assert!(map.is_hidden("seo.metaTitle"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn paths_do_not_leak_across_prefixes() {
        let mut map = VisibilityMap::default();
        map.hidden.insert("seo".to_string());
        assert!(map.is_hidden("seo.metaTitle"));
        assert!(!map.is_hidden("seoExtra"));
        assert!(!map.is_hidden("seoExtra.metaTitle"));
    }
}
