//! Validation scenarios over a portfolio "project" document type.

use copydesk_model::{
    Condition, DocumentType, FieldDef, FieldKind, Severity, ValueMap, ViolationKind,
};
use copydesk_validate::validate_document;
use serde_json::{Value, json};

/// Title, discriminating type, and a report URL that only exists for data
/// analysis projects.
fn project() -> DocumentType {
    DocumentType::new("project")
        .field(FieldDef::string("title").required())
        .field(
            FieldDef::string("type")
                .required()
                .one_of(["frontend", "fullstack", "dataAnalysis"]),
        )
        .field(
            FieldDef::url("reportUrl")
                .required()
                .hidden_when(Condition::not_equals("type", "dataAnalysis")),
        )
}

fn values(json: Value) -> ValueMap {
    match json {
        Value::Object(entries) => entries,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// Required and hidden fields
// ============================================================================

#[test]
fn empty_title_is_the_only_violation() {
    let report = validate_document(&project(), &values(json!({"title": "", "type": "frontend"})));
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].field, "title");
    assert_eq!(report.violations[0].kind, ViolationKind::Required);
    assert!(report.has_errors());
}

#[test]
fn unhidden_required_field_is_reported_alongside() {
    // With type == dataAnalysis the reportUrl field becomes visible, so its
    // required constraint applies too.
    let report = validate_document(&project(), &values(json!({"type": "dataAnalysis"})));
    let fields: Vec<(&str, ViolationKind)> = report
        .violations
        .iter()
        .map(|violation| (violation.field.as_str(), violation.kind))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("title", ViolationKind::Required),
            ("reportUrl", ViolationKind::Required),
        ]
    );
}

#[test]
fn hidden_field_contributes_no_violations() {
    // reportUrl is hidden and holds an invalid URL; nothing is reported.
    let report = validate_document(
        &project(),
        &values(json!({
            "title": "Shop",
            "type": "frontend",
            "reportUrl": "not a url",
        })),
    );
    assert!(report.is_empty());
}

#[test]
fn absent_required_field_yields_exactly_one_violation() {
    let doc_type = DocumentType::new("note").field(
        FieldDef::string("body")
            .required()
            .min_length(10)
            .max_length(50),
    );
    let report = validate_document(&doc_type, &ValueMap::new());
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::Required);
}

#[test]
fn null_equals_absent() {
    let with_null = validate_document(&project(), &values(json!({"title": null, "type": null})));
    let without = validate_document(&project(), &ValueMap::new());
    assert_eq!(with_null.violations, without.violations);
}

#[test]
fn validation_is_idempotent() {
    let snapshot = values(json!({"title": "", "type": "mobile", "extra": 1}));
    let first = validate_document(&project(), &snapshot);
    let second = validate_document(&project(), &snapshot);
    assert_eq!(first, second);
}

// ============================================================================
// Declared constraints
// ============================================================================

#[test]
fn one_of_rejects_unlisted_value() {
    let report = validate_document(&project(), &values(json!({"title": "App", "type": "mobile"})));
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.field, "type");
    assert_eq!(violation.kind, ViolationKind::OneOf);
    insta::assert_snapshot!(
        violation.message,
        @"field `type` is `mobile`, allowed values are: frontend, fullstack, dataAnalysis"
    );
}

#[test]
fn length_constraints_count_characters() {
    let doc_type = DocumentType::new("note")
        .field(FieldDef::string("title").max_length(5))
        .field(FieldDef::text("body").min_length(10));
    let report = validate_document(
        &doc_type,
        &values(json!({"title": "Überstudie", "body": "short"})),
    );
    let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
    assert_eq!(kinds, vec![ViolationKind::MaxLength, ViolationKind::MinLength]);
    assert!(report.violations[0].message.contains("10 characters"));
}

#[test]
fn max_length_applies_to_array_items() {
    let doc_type =
        DocumentType::new("note").field(FieldDef::array("tags", FieldKind::String).max_length(2));
    let report = validate_document(&doc_type, &values(json!({"tags": ["a", "b", "c"]})));
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::MaxLength);
    assert!(report.violations[0].message.contains("3 items"));
}

#[test]
fn pattern_mismatch_is_reported() {
    let doc_type =
        DocumentType::new("note").field(FieldDef::string("code").pattern("^[A-Z]{3}-[0-9]+$"));
    let good = validate_document(&doc_type, &values(json!({"code": "ABC-42"})));
    assert!(good.is_empty());
    let bad = validate_document(&doc_type, &values(json!({"code": "abc"})));
    assert_eq!(bad.violations[0].kind, ViolationKind::Pattern);
}

#[test]
fn warning_constraints_do_not_fail_the_report() {
    let doc_type =
        DocumentType::new("note").field(FieldDef::text("summary").min_length(20).warning());
    let report = validate_document(&doc_type, &values(json!({"summary": "terse"})));
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].severity, Severity::Warning);
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
}

// ============================================================================
// Intrinsic kind checks
// ============================================================================

#[test]
fn type_mismatches_use_intrinsic_checks() {
    let doc_type = DocumentType::new("note")
        .field(FieldDef::string("title"))
        .field(FieldDef::boolean("draft"))
        .field(FieldDef::array("tags", FieldKind::String));
    let report = validate_document(
        &doc_type,
        &values(json!({"title": 7, "draft": "yes", "tags": "solo"})),
    );
    let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::InvalidType,
            ViolationKind::InvalidType,
            ViolationKind::InvalidType,
        ]
    );
    insta::assert_snapshot!(
        report.violations[0].message,
        @"field `title` expects a string value, found number"
    );
}

#[test]
fn url_fields_need_absolute_http_urls() {
    let doc_type = DocumentType::new("note").field(FieldDef::url("link"));
    let ok = validate_document(&doc_type, &values(json!({"link": "https://example.org/x"})));
    assert!(ok.is_empty());

    let relative = validate_document(&doc_type, &values(json!({"link": "/relative/path"})));
    assert_eq!(relative.violations[0].kind, ViolationKind::InvalidUrl);

    let scheme = validate_document(&doc_type, &values(json!({"link": "ftp://example.org"})));
    assert_eq!(scheme.violations[0].kind, ViolationKind::InvalidUrl);
}

#[test]
fn datetime_fields_accept_iso_forms() {
    let doc_type = DocumentType::new("note").field(FieldDef::datetime("publishedAt"));
    for good in [
        "2026-08-24T10:30:00Z",
        "2026-08-24T10:30:00+02:00",
        "2026-08-24T10:30",
        "2026-08-24",
    ] {
        let report = validate_document(&doc_type, &values(json!({"publishedAt": good})));
        assert!(report.is_empty(), "expected `{good}` to validate");
    }
    let report = validate_document(&doc_type, &values(json!({"publishedAt": "24/08/2026"})));
    assert_eq!(report.violations[0].kind, ViolationKind::InvalidDatetime);
}

#[test]
fn slug_fields_check_shape_and_length() {
    let doc_type = DocumentType::new("note")
        .field(FieldDef::string("title"))
        .field(FieldDef::slug("slug", "title", 8));
    let ok = validate_document(
        &doc_type,
        &values(json!({"title": "My Post", "slug": "my-post"})),
    );
    assert!(ok.is_empty());

    let denormalized = validate_document(&doc_type, &values(json!({"slug": "My Post"})));
    assert_eq!(denormalized.violations[0].kind, ViolationKind::InvalidSlug);

    let long = validate_document(&doc_type, &values(json!({"slug": "much-too-long"})));
    assert_eq!(long.violations[0].kind, ViolationKind::MaxLength);
}

// ============================================================================
// Nested scopes, arrays, unknown keys
// ============================================================================

#[test]
fn nested_object_violations_use_dotted_paths() {
    let doc_type = DocumentType::new("page").field(FieldDef::object(
        "seo",
        vec![
            FieldDef::string("metaTitle").required().max_length(60),
            FieldDef::string("metaDescription"),
        ],
    ));
    let report = validate_document(&doc_type, &values(json!({"seo": {"metaTitle": ""}})));
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].field, "seo.metaTitle");
}

#[test]
fn array_elements_use_indexed_paths() {
    let doc_type =
        DocumentType::new("project").field(FieldDef::array("techStack", FieldKind::String));
    let report = validate_document(
        &doc_type,
        &values(json!({"techStack": ["Rust", "Svelte", 3]})),
    );
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].field, "techStack[2]");
    assert_eq!(report.violations[0].kind, ViolationKind::InvalidType);
}

#[test]
fn objects_inside_arrays_are_validated() {
    let doc_type = DocumentType::new("project").field(FieldDef::array(
        "links",
        FieldKind::Object {
            fields: vec![
                FieldDef::string("label").required(),
                FieldDef::url("href").required(),
            ],
        },
    ));
    let report = validate_document(
        &doc_type,
        &values(json!({"links": [{"label": "Docs", "href": "https://example.org"}, {"href": ""}]})),
    );
    let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["links[1].label", "links[1].href"]);
}

#[test]
fn unknown_keys_warn_after_field_violations() {
    let report = validate_document(
        &project(),
        &values(json!({
            "_type": "project",
            "_id": "abc123",
            "title": "",
            "type": "frontend",
            "legacyScore": 5,
        })),
    );
    let fields: Vec<(&str, ViolationKind, Severity)> = report
        .violations
        .iter()
        .map(|v| (v.field.as_str(), v.kind, v.severity))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("title", ViolationKind::Required, Severity::Error),
            ("legacyScore", ViolationKind::UnknownField, Severity::Warning),
        ]
    );
}

#[test]
fn system_keys_are_ignored() {
    let report = validate_document(
        &project(),
        &values(json!({
            "_type": "project",
            "_createdAt": "2026-08-24T09:00:00Z",
            "title": "Shop",
            "type": "frontend",
        })),
    );
    assert!(report.is_empty());
}

// ============================================================================
// Defaults round trip
// ============================================================================

#[test]
fn instance_defaults_validate_cleanly() {
    use copydesk_registry::SchemaRegistry;

    let mut registry = SchemaRegistry::new();
    registry
        .register(
            DocumentType::new("article")
                .field(FieldDef::string("title").required().initial_value("Untitled Article"))
                .field(FieldDef::boolean("featured").initial_value(false))
                .field(FieldDef::datetime("createdAt").required().initial_now()),
        )
        .expect("register article");

    let values = registry.new_instance("article").expect("new instance");
    let report = validate_document(registry.lookup("article").expect("lookup"), &values);
    assert!(report.is_empty(), "defaults must satisfy the schema: {:?}", report.violations);
}

#[test]
fn defaults_of_an_all_optional_type_validate_empty() {
    use copydesk_registry::instance_defaults;

    let doc_type = DocumentType::new("draft")
        .field(FieldDef::string("title").initial_value("Untitled"))
        .field(FieldDef::text("notes"))
        .field(FieldDef::datetime("updatedAt").initial_now());
    let report = validate_document(&doc_type, &instance_defaults(&doc_type));
    assert!(report.is_empty());
}
