use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("document type `{name}` is already registered")]
    DuplicateType { name: String },

    #[error("invalid document type name: `{name}`")]
    InvalidTypeName { name: String },

    #[error("invalid field name `{field}` in document type `{type_name}`")]
    InvalidFieldName { type_name: String, field: String },

    #[error("duplicate field `{field}` in document type `{type_name}`")]
    DuplicateField { type_name: String, field: String },

    #[error(
        "visibility condition on `{field}` in document type `{type_name}` \
         references `{reference}` before it is declared"
    )]
    ForwardReference {
        type_name: String,
        field: String,
        reference: String,
    },

    #[error("unknown document type: `{name}`")]
    UnknownType { name: String },

    #[error("unknown field `{field}` in document type `{type_name}`")]
    UnknownField { type_name: String, field: String },

    #[error("invalid pattern on field `{field}` in document type `{type_name}`: {message}")]
    InvalidPattern {
        type_name: String,
        field: String,
        message: String,
    },

    #[error("invalid default on field `{field}` in document type `{type_name}`: {message}")]
    InvalidDefault {
        type_name: String,
        field: String,
        message: String,
    },

    #[error("invalid definition of field `{field}` in document type `{type_name}`: {message}")]
    InvalidDefinition {
        type_name: String,
        field: String,
        message: String,
    },

    #[error("failed to parse document types JSON: {source}")]
    TypesJson {
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
