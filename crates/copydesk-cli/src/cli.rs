//! CLI argument definitions for the copydesk binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "copydesk",
    version,
    about = "Copydesk - Validate structured content against document schemas",
    long_about = "Validate structured content documents against their schemas.\n\n\
                  Checks field types, declared constraints, and conditional\n\
                  visibility; derives slugs and composes listing previews."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Register additional document types from a JSON file (repeatable).
    #[arg(long = "types", value_name = "FILE", global = true)]
    pub types: Vec<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a document snapshot against its type's schema.
    Validate(ValidateArgs),

    /// List all registered document types.
    Types(TypesArgs),

    /// List the fields of one document type.
    Fields(FieldsArgs),

    /// Emit a fresh document instance with defaults applied.
    New(NewArgs),

    /// Derive a slug for a document from its configured source field.
    Slug(SlugArgs),

    /// Compose the listing preview for a document.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the document snapshot (a JSON object of field values).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Document type name (default: the document's `_type` key).
    #[arg(long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Emit a versioned JSON report instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Emit the registered types as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Document type name.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Emit the field definitions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Document type name.
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

#[derive(Parser)]
pub struct SlugArgs {
    /// Path to the document snapshot (a JSON object of field values).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Document type name (default: the document's `_type` key).
    #[arg(long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Name of the slug field to derive.
    #[arg(long = "field", value_name = "FIELD", default_value = "slug")]
    pub field: String,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the document snapshot (a JSON object of field values).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Document type name (default: the document's `_type` key).
    #[arg(long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Emit the preview as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
