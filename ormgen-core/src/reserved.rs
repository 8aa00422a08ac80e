//! Reserved words and reserved methods per target language.

use crate::Language;

/// An immutable set of names that generated identifiers must not use.
///
/// Sets are backed by `'static` tables, so copies are free and every call
/// for the same language returns the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedSet {
    words: &'static [&'static str],
    case_insensitive: bool,
}

impl ReservedSet {
    /// A set matched by exact comparison.
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            case_insensitive: false,
        }
    }

    /// A set matched ignoring ASCII case (PHP keywords, `CLASS` == `class`).
    pub const fn case_insensitive(words: &'static [&'static str]) -> Self {
        Self {
            words,
            case_insensitive: true,
        }
    }

    /// Check if `name` is in the set.
    pub fn contains(&self, name: &str) -> bool {
        if self.case_insensitive {
            self.words.iter().any(|w| w.eq_ignore_ascii_case(name))
        } else {
            self.words.contains(&name)
        }
    }

    /// Whether matching ignores ASCII case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// The backing table.
    pub fn as_slice(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// PHP keywords, compile-time constants and language constructs.
const PHP_RESERVED_WORDS: &[&str] = &[
    "and", "or", "xor", "exception", "__FILE__", "__LINE__", "array", "as", "break", "case",
    "class", "const", "continue", "declare", "default", "die", "do", "echo", "else", "elseif",
    "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "eval",
    "exit", "extends", "for", "foreach", "function", "global", "if", "include", "include_once",
    "isset", "list", "new", "print", "require", "require_once", "return", "static", "switch",
    "unset", "use", "var", "while", "__FUNCTION__", "__CLASS__", "__METHOD__", "__DIR__",
    "__NAMESPACE__", "final", "php_user_filter", "interface", "implements", "public",
    "protected", "private", "abstract", "clone", "try", "catch", "throw", "this", "namespace",
];

/// Rust keywords.
/// Source: https://doc.rust-lang.org/reference/keywords.html
const RUST_RESERVED_WORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved for future use
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

const TYPESCRIPT_RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "as", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "any", "boolean", "constructor",
    "declare", "get", "module", "require", "number", "set", "string", "symbol", "type", "from",
    "of", "async", "await",
];

const GO_RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

// Dirty-tracking and identity-state queries defined on every generated
// entity's base behavior, spelled the way each language names methods.
const CAMEL_RESERVED_METHODS: &[&str] = &["isModified", "isColumnModified", "isNew", "isDeleted"];
const SNAKE_RESERVED_METHODS: &[&str] =
    &["is_modified", "is_column_modified", "is_new", "is_deleted"];
const PASCAL_RESERVED_METHODS: &[&str] = &["IsModified", "IsColumnModified", "IsNew", "IsDeleted"];

impl Language {
    /// Tokens the language's grammar forbids as identifiers.
    ///
    /// PHP is the one case-insensitive language: its keywords match in any
    /// case, so `List` and `ISSET` are reserved too. Every other set is
    /// matched exactly.
    pub const fn reserved_words(&self) -> ReservedSet {
        match self {
            Language::Php => ReservedSet::case_insensitive(PHP_RESERVED_WORDS),
            Language::Rust => ReservedSet::new(RUST_RESERVED_WORDS),
            Language::TypeScript => ReservedSet::new(TYPESCRIPT_RESERVED_WORDS),
            Language::Go => ReservedSet::new(GO_RESERVED_WORDS),
        }
    }

    /// Methods every generated entity inherits; accessors must not shadow them.
    pub const fn reserved_methods(&self) -> ReservedSet {
        match self {
            Language::Php | Language::TypeScript => ReservedSet::new(CAMEL_RESERVED_METHODS),
            Language::Rust => ReservedSet::new(SNAKE_RESERVED_METHODS),
            Language::Go => ReservedSet::new(PASCAL_RESERVED_METHODS),
        }
    }
}
