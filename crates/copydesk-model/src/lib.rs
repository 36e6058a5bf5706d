pub mod condition;
pub mod constraint;
pub mod document;
pub mod error;
pub mod field;
pub mod slug;
pub mod value;
pub mod violation;

pub use condition::Condition;
pub use constraint::{Constraint, ConstraintKind, Severity};
pub use document::{DocumentType, PreviewSpec};
pub use error::{Result, SchemaError};
pub use field::{DefaultValue, FieldDef, FieldKind};
pub use value::ValueMap;
pub use violation::{ValidationReport, Violation, ViolationKind};
