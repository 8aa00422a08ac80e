//! `is`-style accessors for boolean columns.
//!
//! A boolean column `active` gets an extra accessor `isActive` next to its
//! regular getter. When that name would shadow one of the base class's
//! state queries (`isNew`, `isModified`, ...) the extra accessor is skipped.
//! When it is a reserved word (`isSet` is PHP's `isset`) it is escaped.

use ormgen_core::to_snake_case;
use ormgen_manifest::TableEntry;
use serde::Serialize;

use crate::NamingConvention;

/// Prefixes that already read as a predicate.
const PREDICATE_PREFIXES: &[&str] = &["is_", "has_"];

/// An accessor planned for a boolean column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanAccessor {
    /// Column the accessor reads
    pub column: String,
    /// Accessor method name in the target language, escaped if reserved
    pub name: String,
    /// Whether the name was escaped because it is a reserved word
    pub escaped: bool,
    /// Whether the accessor is skipped because it shadows a reserved method
    pub skipped: bool,
}

/// Unescaped accessor name for a boolean column.
///
/// Columns named like a predicate (`is_active`, `has_children`) keep their
/// name, everything else gets an `is` prefix.
pub fn boolean_accessor_name(naming: &NamingConvention, column: &str) -> String {
    let stem = to_snake_case(column);
    let stem = if PREDICATE_PREFIXES.iter().any(|p| stem.starts_with(p)) {
        stem
    } else {
        format!("is_{}", stem)
    };
    (naming.method_name)(&stem)
}

impl BooleanAccessor {
    /// Plan the accessor for one column.
    pub fn new(naming: &NamingConvention, column: &str) -> Self {
        let name = boolean_accessor_name(naming, column);
        Self {
            column: column.to_string(),
            escaped: naming.is_reserved(&name),
            skipped: naming.is_reserved_method(&name),
            name: naming.safe_name(&name),
        }
    }

    /// Plan accessors for every boolean column of a table.
    pub fn for_table(naming: &NamingConvention, entry: TableEntry<'_>) -> Vec<Self> {
        entry
            .boolean_columns()
            .map(|column| Self::new(naming, column))
            .collect()
    }
}
