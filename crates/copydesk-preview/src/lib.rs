mod compose;
mod slug;

pub use compose::{Preview, compose_preview};
pub use slug::derive_slug;
