//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use ormgen_core::{Language, bare_class_name};

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename, target language and the current
/// path through the manifest, so nested validation can point at the right
/// place in the file.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "ormgen.toml", Language::Php);
/// ctx.validate_name("user", "table")?;
///
/// let nested = ctx.push("user");
/// nested.validate_class_name("user", "Model.Base.User")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Language whose reserved words apply
    language: Language,
    /// Path segments for nested validation (e.g., ["user", "columns"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str, language: Language) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            language,
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            language: self.language,
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "column in 'user'" or just "table" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a table or column name is a usable identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                find_name_span(self.src(), name),
            ));
        }
        Ok(())
    }

    /// Validate a table's qualified class name.
    ///
    /// The bare class name must be non-empty, a plain identifier and not a
    /// reserved word of the target language.
    pub fn validate_class_name(&self, table: &str, qualified: &str) -> Result<()> {
        let bare = bare_class_name(Some(qualified)).unwrap_or_default();
        let span = || find_value_span(self.src(), qualified);

        if bare.is_empty() {
            return Err(self
                .source
                .empty_class_name_error(table, qualified, span()));
        }

        if self.language.reserved_words().contains(bare) {
            return Err(self.source.reserved_keyword_error(
                bare,
                self.context_for("class"),
                self.language,
                span(),
            ));
        }

        if let Some(reason) = validate_class_identifier(bare) {
            return Err(self.source.invalid_identifier_error(
                bare,
                self.context_for("class"),
                reason,
                span(),
            ));
        }

        Ok(())
    }

    /// Validate a file extension override.
    pub fn validate_extension(&self, extension: &str) -> Result<()> {
        if !extension.starts_with('.') {
            return Err(self.source.validation_error(
                format!("extension '{}' must start with '.'", extension),
                find_value_span(self.src(), extension),
            ));
        }
        Ok(())
    }
}

/// Find the span of a table or column name in the TOML source.
///
/// Searches for patterns like `.name]`, `.name.`, `{ name =` or a bare
/// `name =` key at the start of a line.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table headers, e.g. [tables.user] or [tables.user.columns]
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Inline tables, e.g. columns = { is_active = "boolean", name = "string" }
    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
        (format!(",{}=", name), 1usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // Keys inside a [tables.x.columns] section
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(name)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, name.len())));
        }
        offset += line.len();
    }

    None
}

/// Find the span of a string value in the TOML source.
///
/// Basic strings escape backslashes, so `Model\Base` is also searched for
/// as `Model\\Base`.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let escaped = value.replace('\\', "\\\\");
    let candidates = [
        format!("\"{}\"", value),
        format!("'{}'", value),
        format!("\"{}\"", escaped),
    ];

    candidates.iter().find_map(|pattern| {
        src.find(pattern.as_str())
            // +1 to skip the opening quote
            .map(|pos| SourceSpan::from((pos + 1, pattern.len() - 2)))
    })
}

/// Validate a table or column name.
/// Returns None if valid, Some(reason) if invalid.
///
/// Dashes are allowed (e.g. "user-profile") since names are case-converted
/// before they reach generated code.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    let mut prev_was_dash = false;

    for c in chars {
        if c == '-' {
            if prev_was_dash {
                return Some("name cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            prev_was_dash = false;
        } else {
            return Some("name must contain only letters, numbers, underscores, and dashes");
        }
    }

    if prev_was_dash {
        return Some("name cannot end with a dash");
    }

    None
}

/// Validate a bare class name, which is emitted verbatim.
pub(crate) fn validate_class_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("class name must start with a letter or underscore"),
        None => return Some("class name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("class name must contain only letters, numbers, and underscores")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("user").is_none());
        assert!(validate_identifier("user_profile").is_none());
        assert!(validate_identifier("UserProfile").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("book-author").is_none());
        assert!(validate_identifier("col1").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("-user").is_some());
        assert!(validate_identifier("user-").is_some());
        assert!(validate_identifier("user--profile").is_some());
        assert!(validate_identifier("user.profile").is_some());
        assert!(validate_identifier("user profile").is_some());
    }

    #[test]
    fn test_class_identifiers() {
        assert!(validate_class_identifier("User").is_none());
        assert!(validate_class_identifier("User_2").is_none());
        assert!(validate_class_identifier("User-Profile").is_some());
        assert!(validate_class_identifier("2User").is_some());
    }

    #[test]
    fn test_find_name_span_header() {
        let src = "[tables.user]\nclass = \"User\"";
        let span = find_name_span(src, "user").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_name_span_inline_table() {
        let src = r#"columns = { is_active = "boolean", name = "string" }"#;
        let span = find_name_span(src, "name").unwrap();
        assert_eq!(span.offset(), 35);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_name_span_section_key() {
        let src = "[tables.user.columns]\n  is_active = \"boolean\"";
        let span = find_name_span(src, "is_active").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 9);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("[generator]\nlanguage = \"php\"", "user").is_none());
    }

    #[test]
    fn test_find_value_span() {
        let src = "class = \"Model.Base.\"";
        let span = find_value_span(src, "Model.Base.").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 11);
    }

    #[test]
    fn test_find_value_span_escaped_backslashes() {
        let src = r#"class = "Model\\List""#;
        let span = find_value_span(src, "Model\\List").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 11);
    }

    #[test]
    fn test_parse_context_push() {
        let ctx = ParseContext::new("", "ormgen.toml", Language::Php);
        let nested = ctx.push("user").push("columns");
        assert_eq!(nested.path_string(), "user.columns");
        assert_eq!(nested.context_for("column"), "column in 'user.columns'");
        assert_eq!(ctx.context_for("table"), "table");
    }

    #[test]
    fn test_validate_class_name_ok() {
        let ctx = ParseContext::new("", "ormgen.toml", Language::Php);
        assert!(ctx.validate_class_name("user", "Model.Base.User").is_ok());
        assert!(ctx.validate_class_name("user", "Model\\Base\\User").is_ok());
        assert!(ctx.validate_class_name("user", "User").is_ok());
    }

    #[test]
    fn test_validate_class_name_reserved() {
        let src = "[tables.list]\nclass = \"Model.List\"";
        let ctx = ParseContext::new(src, "ormgen.toml", Language::Php);
        let err = ctx.validate_class_name("list", "Model.List").unwrap_err();
        assert!(err.to_string().contains("php reserved keyword"));
    }

    #[test]
    fn test_validate_class_name_reserved_depends_on_language() {
        let rust = ParseContext::new("", "ormgen.toml", Language::Rust);
        assert!(rust.validate_class_name("list", "Model.List").is_ok());
        assert!(rust.validate_class_name("self_", "Model.Self").is_err());
    }

    #[test]
    fn test_validate_class_name_empty() {
        let ctx = ParseContext::new("", "ormgen.toml", Language::Go);
        let err = ctx.validate_class_name("user", "Model.Base.").unwrap_err();
        assert!(err.to_string().contains("empty class name"));
    }

    #[test]
    fn test_validate_extension() {
        let ctx = ParseContext::new("", "ormgen.toml", Language::Php);
        assert!(ctx.validate_extension(".php").is_ok());
        assert!(ctx.validate_extension("php").is_err());
    }
}
