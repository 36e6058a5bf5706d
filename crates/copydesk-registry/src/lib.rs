#![deny(unsafe_code)]

pub mod defaults;
pub mod loader;
pub mod registry;

pub use crate::defaults::{instance_defaults, merge_defaults};
pub use crate::loader::parse_types_json;
pub use crate::registry::SchemaRegistry;
