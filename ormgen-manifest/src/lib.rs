//! Manifest parsing for `ormgen.toml`.
//!
//! A manifest names the target language, the default output prefix and the
//! tables whose model classes get generated. Parsing validates every class
//! name against the target language's reserved words and reports problems
//! as [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod table;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_BASE_CLASS, GeneratorConfig, Manifest, OrmToml, ParseContext, parse_manifest,
};
pub use ormgen_core::Language;
pub use table::{ColumnType, Table, TableEntry};
