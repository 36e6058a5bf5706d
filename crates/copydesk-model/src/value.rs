use serde_json::{Map, Value};

/// Field values of one document scope, keyed by field name.
///
/// A missing key and an explicit JSON `null` both mean "unset". Keys
/// starting with `_` belong to the platform (`_type`, `_id`, ...) and are
/// ignored by every operation.
pub type ValueMap = Map<String, Value>;

pub fn is_system_key(key: &str) -> bool {
    key.starts_with('_')
}

/// True when the value counts as having no content: null, a blank string,
/// or an empty array or object.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// The JSON type of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a value as preview text. Nulls and objects have no printable
/// form; arrays join the printable forms of their elements.
pub fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_string).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Null | Value::Object(_) => None,
    }
}

/// Joins a field name onto a dotted parent path.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_values() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!("   ")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!("x")));
    }

    #[test]
    fn display_strings() {
        assert_eq!(display_string(&json!("Hello")), Some("Hello".to_string()));
        assert_eq!(display_string(&json!(true)), Some("true".to_string()));
        assert_eq!(display_string(&json!(42)), Some("42".to_string()));
        assert_eq!(
            display_string(&json!(["Rust", "Svelte"])),
            Some("Rust, Svelte".to_string())
        );
        assert_eq!(display_string(&json!("  ")), None);
        assert_eq!(display_string(&Value::Null), None);
        assert_eq!(display_string(&json!({"a": 1})), None);
    }

    #[test]
    fn path_joining() {
        assert_eq!(join_path("", "title"), "title");
        assert_eq!(join_path("seo", "metaTitle"), "seo.metaTitle");
    }
}
