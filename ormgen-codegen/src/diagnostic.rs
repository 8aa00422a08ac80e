//! Diagnostics reported by lints, anchored to a place in the manifest.

use std::fmt;

use serde::{Serialize, Serializer};

/// How bad a lint finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The generated code would be broken.
    Error,
    /// The generated code works but differs from what the manifest asks for.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A place in `ormgen.toml`, displayed as a dotted key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A key of the `[generator]` section, e.g. `generator.base_class`
    Generator(&'static str),
    /// A table section, e.g. `tables.user`
    Table(String),
    /// A key of a table section, e.g. `tables.user.interface`
    TableKey(String, &'static str),
    /// A column of a table, e.g. `tables.user.columns.active`
    Column(String, String),
}

impl Location {
    pub fn table(table: impl Into<String>) -> Self {
        Location::Table(table.into())
    }

    pub fn table_key(table: impl Into<String>, key: &'static str) -> Self {
        Location::TableKey(table.into(), key)
    }

    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Location::Column(table.into(), column.into())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Generator(key) => write!(f, "generator.{}", key),
            Location::Table(table) => write!(f, "tables.{}", table),
            Location::TableKey(table, key) => write!(f, "tables.{}.{}", table, key),
            Location::Column(table, column) => write!(f, "tables.{}.columns.{}", table, column),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A finding of one lint.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the lint that produced this diagnostic.
    pub lint: &'static str,
    pub message: String,
    /// Where in the manifest the problem is.
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn error(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    fn new(severity: Severity, lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Anchor this diagnostic to a place in the manifest.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
