//! Class name and file path resolution for one target language.

use ormgen_core::{Language, ReservedSet, bare_class_name, build_file_path};
use ormgen_manifest::GeneratorConfig;

use crate::language::{NamingConvention, naming_for};

/// Resolves class names and output paths for a target language.
///
/// The resolver is a thin, immutable wrapper: it owns the file extension
/// and borrows the language's static naming tables, so it is cheap to clone
/// and safe to share between threads.
#[derive(Debug, Clone)]
pub struct NameResolver {
    naming: &'static NamingConvention,
    extension: String,
}

impl NameResolver {
    /// Resolver using the language's conventional extension.
    pub fn new(language: Language) -> Self {
        Self {
            naming: naming_for(language),
            extension: language.extension().to_string(),
        }
    }

    /// Resolver configured from a manifest's `[generator]` section.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.language).with_extension(config.extension())
    }

    /// Override the file extension (including the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn language(&self) -> Language {
        self.naming.language
    }

    pub fn naming(&self) -> &'static NamingConvention {
        self.naming
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Bare class name of a qualified name, see [`bare_class_name`].
    pub fn class_name<'a>(&self, qualified: Option<&'a str>) -> Option<&'a str> {
        bare_class_name(qualified)
    }

    /// Output path for a class under `prefix`, see [`build_file_path`].
    pub fn file_path(&self, prefix: &str, classname: Option<&str>) -> String {
        build_file_path(prefix, classname, &self.extension)
    }

    /// Reserved words of the target language.
    pub fn reserved_words(&self) -> ReservedSet {
        self.naming.reserved_words
    }

    /// Methods the generated base class already defines.
    pub fn reserved_methods(&self) -> ReservedSet {
        self.naming.reserved_methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extension() {
        assert_eq!(NameResolver::new(Language::Php).extension(), ".php");
        assert_eq!(NameResolver::new(Language::Go).extension(), ".go");
    }

    #[test]
    fn test_file_path_uses_extension() {
        let resolver = NameResolver::new(Language::TypeScript);
        assert_eq!(resolver.file_path("src/models", Some("User")), "src/models/User.ts");
        assert_eq!(resolver.file_path("src/models/index", None), "src/models/index.ts");

        let resolver = resolver.with_extension(".model.ts");
        assert_eq!(resolver.file_path("", Some("User")), "User.model.ts");
    }

    #[test]
    fn test_class_name() {
        let resolver = NameResolver::new(Language::Php);
        assert_eq!(resolver.class_name(Some("Model\\Base\\User")), Some("User"));
        assert_eq!(resolver.class_name(None), None);
    }

    #[test]
    fn test_reserved_sets_follow_language() {
        let php = NameResolver::new(Language::Php);
        assert!(php.reserved_words().contains("namespace"));
        assert!(php.reserved_methods().contains("isModified"));

        let rust = NameResolver::new(Language::Rust);
        assert!(rust.reserved_words().contains("impl"));
        assert!(rust.reserved_methods().contains("is_modified"));
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig {
            language: Language::Php,
            output: "generated".to_string(),
            extension: Some(".inc.php".to_string()),
            base_class: "BaseObject".to_string(),
        };
        let resolver = NameResolver::from_config(&config);
        assert_eq!(resolver.language(), Language::Php);
        assert_eq!(resolver.file_path("lib", Some("User")), "lib/User.inc.php");
    }

    #[test]
    fn test_end_to_end() {
        let resolver = NameResolver::new(Language::Go);
        let class = resolver.class_name(Some("Model.Base.UserPeer"));
        assert_eq!(class, Some("UserPeer"));
        assert_eq!(
            resolver.file_path("generated/model", class),
            "generated/model/UserPeer.go"
        );
    }
}
