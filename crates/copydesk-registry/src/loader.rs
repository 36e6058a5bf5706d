use copydesk_model::{DocumentType, SchemaError};

/// Parses a JSON array of serialized document types.
///
/// Parsed types still go through `SchemaRegistry::register`, so a file that
/// parses cleanly can still be rejected there.
pub fn parse_types_json(contents: &str) -> Result<Vec<DocumentType>, SchemaError> {
    serde_json::from_str(contents).map_err(|source| SchemaError::TypesJson { source })
}
