//! Document validation engine.
//!
//! Walks a document type's fields in declaration order, skips hidden
//! fields, and reports violations as data. Validation itself never fails;
//! malformed schemas are rejected earlier, at registration.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use copydesk_model::slug::is_normalized_slug;
use copydesk_model::value::{is_empty_value, is_system_key, join_path, json_type_name};
use copydesk_model::{
    Constraint, ConstraintKind, DocumentType, FieldDef, FieldKind, Severity, ValidationReport,
    ValueMap, Violation, ViolationKind,
};
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::visibility::hidden_in_scope;

/// Validates one document snapshot against its type.
///
/// Violations come back in field declaration order, intrinsic kind checks
/// before declared constraints, with warnings for undeclared keys at the
/// end of each scope. `values` is never mutated and repeated calls yield
/// identical reports.
pub fn validate_document(doc_type: &DocumentType, values: &ValueMap) -> ValidationReport {
    let mut violations = Vec::new();
    validate_scope(&doc_type.fields, values, "", &mut violations);
    ValidationReport {
        type_name: doc_type.name.clone(),
        violations,
    }
}

fn validate_scope(fields: &[FieldDef], values: &ValueMap, prefix: &str, out: &mut Vec<Violation>) {
    let hidden = hidden_in_scope(fields, values);
    for field in fields {
        if hidden.contains(field.name.as_str()) {
            continue;
        }
        let path = join_path(prefix, &field.name);
        match values.get(&field.name) {
            None => {
                if let Some(constraint) = field.required_constraint() {
                    out.push(required_violation(&path, constraint));
                }
            }
            Some(value) if is_empty_value(value) => {
                // Absence is only ever reported through `required`.
                if let Some(constraint) = field.required_constraint() {
                    out.push(required_violation(&path, constraint));
                }
            }
            Some(value) => {
                if let Some(violation) = kind_check(&field.kind, value, &path) {
                    out.push(violation);
                }
                for constraint in &field.constraints {
                    if let Some(violation) = constraint_check(constraint, value, &path) {
                        out.push(violation);
                    }
                }
                descend(&field.kind, value, &path, out);
            }
        }
    }
    for key in values.keys() {
        if is_system_key(key) || fields.iter().any(|field| field.name == *key) {
            continue;
        }
        let path = join_path(prefix, key);
        out.push(Violation::warning(
            path.clone(),
            ViolationKind::UnknownField,
            format!("field `{path}` is not declared on this document type"),
        ));
    }
}

fn required_violation(path: &str, constraint: &Constraint) -> Violation {
    Violation::with_severity(
        path,
        ViolationKind::Required,
        constraint.severity,
        format!("required field `{path}` has no value"),
    )
}

/// The kind's own check, run before any declared constraint.
fn kind_check(kind: &FieldKind, value: &Value, path: &str) -> Option<Violation> {
    match kind {
        FieldKind::String | FieldKind::Text | FieldKind::Reference { .. } => {
            (!value.is_string()).then(|| type_mismatch(kind, value, path))
        }
        FieldKind::Boolean => (!value.is_boolean()).then(|| type_mismatch(kind, value, path)),
        FieldKind::Array { .. } => (!value.is_array()).then(|| type_mismatch(kind, value, path)),
        FieldKind::Object { .. } => (!value.is_object()).then(|| type_mismatch(kind, value, path)),
        FieldKind::Url => match value.as_str() {
            None => Some(type_mismatch(kind, value, path)),
            Some(text) => check_url(text, path),
        },
        FieldKind::Datetime => match value.as_str() {
            None => Some(type_mismatch(kind, value, path)),
            Some(text) => check_datetime(text, path),
        },
        FieldKind::Slug { max_length, .. } => match value.as_str() {
            None => Some(type_mismatch(kind, value, path)),
            Some(text) => check_slug(text, *max_length, path),
        },
    }
}

fn type_mismatch(kind: &FieldKind, value: &Value, path: &str) -> Violation {
    Violation::error(
        path,
        ViolationKind::InvalidType,
        format!(
            "field `{path}` expects a {} value, found {}",
            kind.name(),
            json_type_name(value)
        ),
    )
}

/// Absolute `http`/`https` URLs only.
fn check_url(text: &str, path: &str) -> Option<Violation> {
    match Url::parse(text) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
        Ok(parsed) => Some(Violation::error(
            path,
            ViolationKind::InvalidUrl,
            format!(
                "field `{path}` must use http or https, found scheme `{}`",
                parsed.scheme()
            ),
        )),
        Err(_) => Some(Violation::error(
            path,
            ViolationKind::InvalidUrl,
            format!("field `{path}` is not a valid absolute URL: `{text}`"),
        )),
    }
}

fn check_datetime(text: &str, path: &str) -> Option<Violation> {
    if is_iso_datetime(text) {
        return None;
    }
    Some(Violation::error(
        path,
        ViolationKind::InvalidDatetime,
        format!("field `{path}` is not an ISO 8601 datetime: `{text}`"),
    ))
}

/// RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS]`, or a bare date.
fn is_iso_datetime(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

fn check_slug(text: &str, max_length: usize, path: &str) -> Option<Violation> {
    if !is_normalized_slug(text) {
        return Some(Violation::error(
            path,
            ViolationKind::InvalidSlug,
            format!("field `{path}` is not a normalized slug: `{text}`"),
        ));
    }
    if text.chars().count() > max_length {
        return Some(Violation::error(
            path,
            ViolationKind::MaxLength,
            format!("field `{path}` exceeds the slug maximum of {max_length} characters"),
        ));
    }
    None
}

/// One declared constraint against one present value. Constraints that do
/// not apply to the value's JSON type are skipped.
fn constraint_check(constraint: &Constraint, value: &Value, path: &str) -> Option<Violation> {
    let severity = constraint.severity;
    match &constraint.kind {
        // Presence was decided before any value checks ran.
        ConstraintKind::Required => None,
        ConstraintKind::MaxLength { limit } => check_max_length(value, *limit, severity, path),
        ConstraintKind::MinLength { limit } => check_min_length(value, *limit, severity, path),
        ConstraintKind::Pattern { pattern } => check_pattern(value, pattern, severity, path),
        ConstraintKind::OneOf { values } => check_one_of(value, values, severity, path),
    }
}

fn check_max_length(
    value: &Value,
    limit: usize,
    severity: Severity,
    path: &str,
) -> Option<Violation> {
    match value {
        Value::String(text) => {
            let length = text.chars().count();
            (length > limit).then(|| {
                Violation::with_severity(
                    path,
                    ViolationKind::MaxLength,
                    severity,
                    format!("field `{path}` has {length} characters, maximum is {limit}"),
                )
            })
        }
        Value::Array(items) => {
            let length = items.len();
            (length > limit).then(|| {
                Violation::with_severity(
                    path,
                    ViolationKind::MaxLength,
                    severity,
                    format!("field `{path}` has {length} items, maximum is {limit}"),
                )
            })
        }
        _ => None,
    }
}

fn check_min_length(
    value: &Value,
    limit: usize,
    severity: Severity,
    path: &str,
) -> Option<Violation> {
    match value {
        Value::String(text) => {
            let length = text.chars().count();
            (length < limit).then(|| {
                Violation::with_severity(
                    path,
                    ViolationKind::MinLength,
                    severity,
                    format!("field `{path}` has {length} characters, minimum is {limit}"),
                )
            })
        }
        Value::Array(items) => {
            let length = items.len();
            (length < limit).then(|| {
                Violation::with_severity(
                    path,
                    ViolationKind::MinLength,
                    severity,
                    format!("field `{path}` has {length} items, minimum is {limit}"),
                )
            })
        }
        _ => None,
    }
}

fn check_pattern(
    value: &Value,
    pattern: &str,
    severity: Severity,
    path: &str,
) -> Option<Violation> {
    let text = value.as_str()?;
    // Uncompilable patterns are rejected at registration; skip rather than
    // guess here.
    let regex = Regex::new(pattern).ok()?;
    (!regex.is_match(text)).then(|| {
        Violation::with_severity(
            path,
            ViolationKind::Pattern,
            severity,
            format!("field `{path}` does not match pattern `{pattern}`"),
        )
    })
}

fn check_one_of(
    value: &Value,
    allowed: &[Value],
    severity: Severity,
    path: &str,
) -> Option<Violation> {
    if allowed.contains(value) {
        return None;
    }
    let listed: Vec<String> = allowed.iter().map(literal).collect();
    Some(Violation::with_severity(
        path,
        ViolationKind::OneOf,
        severity,
        format!(
            "field `{path}` is `{}`, allowed values are: {}",
            literal(value),
            listed.join(", ")
        ),
    ))
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Recurses into object scopes and array elements. Empty elements are
/// ignored, mirroring how absent field values are handled.
fn descend(kind: &FieldKind, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match (kind, value) {
        (FieldKind::Object { fields }, Value::Object(entries)) => {
            validate_scope(fields, entries, path, out);
        }
        (FieldKind::Array { of }, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                if is_empty_value(item) {
                    continue;
                }
                let element_path = format!("{path}[{index}]");
                if let Some(violation) = kind_check(of, item, &element_path) {
                    out.push(violation);
                }
                descend(of, item, &element_path, out);
            }
        }
        _ => {}
    }
}
