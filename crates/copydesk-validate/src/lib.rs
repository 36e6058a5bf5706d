mod engine;
pub mod visibility;

pub use engine::validate_document;
pub use visibility::{VisibilityMap, resolve_visibility};
