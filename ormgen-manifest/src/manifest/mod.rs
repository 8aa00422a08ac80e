//! Manifest types and parsing for ormgen.toml files.

mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
use ormgen_core::Language;
use serde::Deserialize;

pub use file::OrmToml;
pub use parse::parse_manifest;
pub use validate::ParseContext;

use crate::{Table, TableEntry};

/// Base class used when neither the table nor the generator names one.
pub const DEFAULT_BASE_CLASS: &str = "BaseObject";

/// Root manifest for ormgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generator settings
    pub generator: GeneratorConfig,

    /// Tables in declaration order
    #[serde(default)]
    pub tables: IndexMap<String, Table>,
}

/// The `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Target language for generated classes
    pub language: Language,

    /// Default path prefix for generated files
    #[serde(default)]
    pub output: String,

    /// File extension override (e.g. ".inc.php")
    pub extension: Option<String>,

    /// Default base class for every table
    #[serde(default = "default_base_class")]
    pub base_class: String,
}

fn default_base_class() -> String {
    DEFAULT_BASE_CLASS.to_string()
}

impl GeneratorConfig {
    /// Extension for generated files, the language's default unless overridden.
    pub fn extension(&self) -> &str {
        self.extension
            .as_deref()
            .unwrap_or_else(|| self.language.extension())
    }
}

impl Manifest {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<TableEntry<'_>> {
        self.tables
            .get_key_value(name)
            .map(|(name, table)| TableEntry::new(name, table, &self.generator))
    }

    /// Iterate over all tables in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = TableEntry<'_>> {
        self.tables
            .iter()
            .map(|(name, table)| TableEntry::new(name, table, &self.generator))
    }
}
