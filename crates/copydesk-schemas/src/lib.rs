//! Built-in document types and the registry they live in.

mod project;

use copydesk_model::SchemaError;
use copydesk_registry::SchemaRegistry;

pub use project::project;

/// Builds a registry holding every built-in document type.
pub fn builtin_registry() -> Result<SchemaRegistry, SchemaError> {
    let mut registry = SchemaRegistry::new();
    registry.register(project())?;
    Ok(registry)
}
