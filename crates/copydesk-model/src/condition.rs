use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::ValueMap;

/// A visibility predicate over the sibling values of a field's scope.
///
/// Conditions are pure data so a registry can inspect which fields they
/// reference before any document exists. A field whose condition evaluates
/// to `true` is hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Condition {
    /// The named sibling has a value (present and non-null).
    IsSet { field: String },
    /// The named sibling equals the given value.
    Equals { field: String, value: Value },
    /// The named sibling is absent or differs from the given value.
    NotEquals { field: String, value: Value },
    Not { inner: Box<Condition> },
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
}

impl Condition {
    pub fn is_set(field: impl Into<String>) -> Self {
        Self::IsSet {
            field: field.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn not_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::NotEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn negated(self) -> Self {
        Self::Not {
            inner: Box::new(self),
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Self::All { conditions }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Self::Any { conditions }
    }

    /// Evaluates the condition against one scope's sibling values.
    pub fn evaluate(&self, siblings: &ValueMap) -> bool {
        match self {
            Self::IsSet { field } => siblings.get(field).is_some_and(|value| !value.is_null()),
            Self::Equals { field, value } => siblings
                .get(field)
                .is_some_and(|current| !current.is_null() && current == value),
            Self::NotEquals { field, value } => !siblings
                .get(field)
                .is_some_and(|current| !current.is_null() && current == value),
            Self::Not { inner } => !inner.evaluate(siblings),
            Self::All { conditions } => conditions.iter().all(|c| c.evaluate(siblings)),
            Self::Any { conditions } => conditions.iter().any(|c| c.evaluate(siblings)),
        }
    }

    /// The set of sibling field names the condition reads.
    pub fn referenced_fields(&self) -> BTreeSet<&str> {
        let mut fields = BTreeSet::new();
        self.collect_references(&mut fields);
        fields
    }

    fn collect_references<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::IsSet { field }
            | Self::Equals { field, .. }
            | Self::NotEquals { field, .. } => {
                out.insert(field.as_str());
            }
            Self::Not { inner } => inner.collect_references(out),
            Self::All { conditions } | Self::Any { conditions } => {
                for condition in conditions {
                    condition.collect_references(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, Value)]) -> ValueMap {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn not_equals_holds_for_absent_sibling() {
        // An unset sibling differs from every value.
        let condition = Condition::not_equals("type", "dataAnalysis");
        assert!(condition.evaluate(&ValueMap::new()));
        assert!(condition.evaluate(&values(&[("type", json!("frontend"))])));
        assert!(condition.evaluate(&values(&[("type", Value::Null)])));
        assert!(!condition.evaluate(&values(&[("type", json!("dataAnalysis"))])));
    }

    #[test]
    fn is_set_ignores_null() {
        let condition = Condition::is_set("featured");
        assert!(!condition.evaluate(&ValueMap::new()));
        assert!(!condition.evaluate(&values(&[("featured", Value::Null)])));
        assert!(condition.evaluate(&values(&[("featured", json!(false))])));
    }

    #[test]
    fn combinators_nest() {
        let condition = Condition::all(vec![
            Condition::equals("type", "frontend"),
            Condition::is_set("demoUrl").negated(),
        ]);
        assert!(condition.evaluate(&values(&[("type", json!("frontend"))])));
        assert!(!condition.evaluate(&values(&[
            ("type", json!("frontend")),
            ("demoUrl", json!("https://example.org")),
        ])));
    }

    #[test]
    fn collects_referenced_fields() {
        let condition = Condition::any(vec![
            Condition::equals("type", "frontend"),
            Condition::all(vec![
                Condition::is_set("demoUrl"),
                Condition::not_equals("type", "fullstack"),
            ]),
        ]);
        let fields: Vec<&str> = condition.referenced_fields().into_iter().collect();
        assert_eq!(fields, vec!["demoUrl", "type"]);
    }

    #[test]
    fn serializes_with_op_tag() {
        let condition = Condition::not_equals("type", "dataAnalysis");
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(
            json,
            json!({"op": "not-equals", "field": "type", "value": "dataAnalysis"})
        );
    }
}
