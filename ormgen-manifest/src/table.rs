//! Table definitions and their class name answers.

use std::borrow::Cow;

use indexmap::IndexMap;
use ormgen_core::{ClassNameProvider, to_pascal_case};
use serde::Deserialize;

use crate::GeneratorConfig;

/// A `[tables.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Table {
    /// Qualified class name (e.g. "Model.Base.User"), defaults to the
    /// PascalCase table name
    pub class: Option<String>,

    /// Base class override for this table
    pub base_class: Option<String>,

    /// Interface the generated class implements
    pub interface: Option<String>,

    /// Path prefix override for this table's generated file
    pub package: Option<String>,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: IndexMap<String, ColumnType>,
}

/// Column types the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Timestamp,
}

impl ColumnType {
    /// Boolean columns get an `is`-style accessor.
    pub fn is_boolean(&self) -> bool {
        matches!(self, ColumnType::Boolean)
    }
}

/// A table together with the generator defaults it falls back on.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry<'a> {
    pub name: &'a str,
    pub table: &'a Table,
    generator: &'a GeneratorConfig,
}

impl<'a> TableEntry<'a> {
    pub(crate) fn new(name: &'a str, table: &'a Table, generator: &'a GeneratorConfig) -> Self {
        Self {
            name,
            table,
            generator,
        }
    }

    /// Qualified class name, derived from the table name when not set.
    pub fn qualified_name(&self) -> Cow<'a, str> {
        match &self.table.class {
            Some(class) => Cow::Borrowed(class.as_str()),
            None => Cow::Owned(to_pascal_case(self.name)),
        }
    }

    /// Path prefix for the generated file.
    pub fn prefix(&self) -> &'a str {
        self.table
            .package
            .as_deref()
            .unwrap_or(&self.generator.output)
    }

    /// Boolean columns in declaration order.
    pub fn boolean_columns(self) -> impl Iterator<Item = &'a str> {
        self.table
            .columns
            .iter()
            .filter(|(_, ty)| ty.is_boolean())
            .map(|(name, _)| name.as_str())
    }
}

impl ClassNameProvider for TableEntry<'_> {
    fn base_class_name(&self) -> String {
        self.table
            .base_class
            .clone()
            .unwrap_or_else(|| self.generator.base_class.clone())
    }

    fn interface_name(&self) -> Option<String> {
        self.table.interface.clone()
    }
}
