//! Library components for the `copydesk` binary.

pub mod logging;
pub mod payload;
