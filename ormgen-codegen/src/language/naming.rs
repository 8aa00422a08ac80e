//! Naming conventions for different target languages.

use ormgen_core::{Language, ReservedSet, to_camel_case, to_pascal_case, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how table and column names become class and method names, and
/// which names the generated code must not use.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Language these rules apply to
    pub language: Language,
    /// Transform table name to class name (e.g., "user_profile" -> "UserProfile")
    pub table_to_class: fn(&str) -> String,
    /// Transform a snake_case method stem to a method name (e.g., "is_active" -> "isActive")
    pub method_name: fn(&str) -> String,
    /// Reserved words of the language
    pub reserved_words: ReservedSet,
    /// Methods every generated entity inherits
    pub reserved_methods: ReservedSet,
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Check if a method name would shadow an inherited method.
    pub fn is_reserved_method(&self, name: &str) -> bool {
        self.reserved_methods.contains(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Class name for a table. Not escaped: reserved class names are
    /// rejected when the manifest is parsed.
    pub fn class_name(&self, table: &str) -> String {
        (self.table_to_class)(table)
    }

    /// Method name for a snake_case stem, escaped if reserved.
    pub fn method(&self, stem: &str) -> String {
        let transformed = (self.method_name)(stem);
        self.safe_name(&transformed)
    }
}

/// Path keywords that cannot be raw identifiers (`r#self` is an error).
const RUST_PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if RUST_PATH_KEYWORDS.contains(&name) {
        escape_with_suffix(name)
    } else {
        format!("r#{}", name)
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

fn escape_with_suffix(name: &str) -> String {
    format!("{}_", name)
}

/// PHP naming conventions.
pub const PHP_NAMING: NamingConvention = NamingConvention {
    language: Language::Php,
    table_to_class: to_pascal_case,
    method_name: to_camel_case,
    reserved_words: Language::Php.reserved_words(),
    reserved_methods: Language::Php.reserved_methods(),
    escape_reserved: escape_with_suffix,
};

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    language: Language::Rust,
    table_to_class: to_pascal_case,
    method_name: to_snake_case,
    reserved_words: Language::Rust.reserved_words(),
    reserved_methods: Language::Rust.reserved_methods(),
    escape_reserved: escape_rust_reserved,
};

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    language: Language::TypeScript,
    table_to_class: to_pascal_case,
    method_name: to_camel_case,
    reserved_words: Language::TypeScript.reserved_words(),
    reserved_methods: Language::TypeScript.reserved_methods(),
    escape_reserved: escape_with_underscore,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    language: Language::Go,
    table_to_class: to_pascal_case,
    method_name: to_pascal_case, // Go exports with PascalCase
    reserved_words: Language::Go.reserved_words(),
    reserved_methods: Language::Go.reserved_methods(),
    escape_reserved: escape_with_underscore,
};
