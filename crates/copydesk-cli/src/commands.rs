use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, info, warn};

use copydesk_cli::payload::ReportPayload;
use copydesk_model::{DocumentType, ValidationReport, ValueMap, value::json_type_name};
use copydesk_preview::{compose_preview, derive_slug};
use copydesk_registry::{SchemaRegistry, parse_types_json};
use copydesk_schemas::builtin_registry;
use copydesk_validate::validate_document;

use crate::cli::{FieldsArgs, NewArgs, PreviewArgs, SlugArgs, TypesArgs, ValidateArgs};
use crate::summary::{print_fields, print_report, print_types};

/// Builds the registry of built-in types plus any `--types` files.
///
/// Registration failures are fatal; a registry is never left holding a
/// half-registered type.
pub fn build_registry(extra_types: &[PathBuf]) -> Result<SchemaRegistry> {
    let mut registry = builtin_registry().context("register built-in document types")?;
    for path in extra_types {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read document types from {}", path.display()))?;
        let types = parse_types_json(&raw)
            .with_context(|| format!("parse document types from {}", path.display()))?;
        let count = types.len();
        registry
            .register_all(types)
            .with_context(|| format!("register document types from {}", path.display()))?;
        debug!(path = %path.display(), count, "registered document types");
    }
    Ok(registry)
}

pub fn run_validate(registry: &SchemaRegistry, args: &ValidateArgs) -> Result<ValidationReport> {
    let values = load_document(&args.document)?;
    let type_name = resolve_type_name(args.type_name.as_deref(), &values)?;
    let doc_type = registry.lookup(&type_name)?;
    let report = validate_document(doc_type, &values);
    info!(
        document_type = %report.type_name,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated document"
    );
    if args.json {
        let payload = ReportPayload::new(&report, Some(&args.document));
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&report, &args.document);
    }
    Ok(report)
}

pub fn run_types(registry: &SchemaRegistry, args: &TypesArgs) -> Result<()> {
    if args.json {
        let types: Vec<&DocumentType> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        print_types(registry);
    }
    Ok(())
}

pub fn run_fields(registry: &SchemaRegistry, args: &FieldsArgs) -> Result<()> {
    let doc_type = registry.lookup(&args.type_name)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&doc_type.fields)?);
    } else {
        print_fields(doc_type);
    }
    Ok(())
}

pub fn run_new(registry: &SchemaRegistry, args: &NewArgs) -> Result<()> {
    let values = registry.new_instance(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(values))?);
    Ok(())
}

pub fn run_slug(registry: &SchemaRegistry, args: &SlugArgs) -> Result<()> {
    let values = load_document(&args.document)?;
    let type_name = resolve_type_name(args.type_name.as_deref(), &values)?;
    let doc_type = registry.lookup(&type_name)?;
    match derive_slug(doc_type, &values, &args.field)? {
        Some(slug) => println!("{slug}"),
        None => warn!(
            field = %args.field,
            "no slug could be derived; the source field is unset, empty, or hidden"
        ),
    }
    Ok(())
}

pub fn run_preview(registry: &SchemaRegistry, args: &PreviewArgs) -> Result<()> {
    let values = load_document(&args.document)?;
    let type_name = resolve_type_name(args.type_name.as_deref(), &values)?;
    let doc_type = registry.lookup(&type_name)?;
    let preview = compose_preview(doc_type, &values);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!("{}", preview.title);
        if !preview.subtitle.is_empty() {
            println!("{}", preview.subtitle);
        }
    }
    Ok(())
}

fn load_document(path: &Path) -> Result<ValueMap> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read document from {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse document from {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!(
            "document {} must be a JSON object, found {}",
            path.display(),
            json_type_name(&other)
        ),
    }
}

/// Resolves the document type from `--type` or the document's `_type` key.
fn resolve_type_name(explicit: Option<&str>, values: &ValueMap) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    match values.get("_type").and_then(Value::as_str) {
        Some(name) => Ok(name.to_string()),
        None => bail!("no document type given: pass --type or set `_type` in the document"),
    }
}
