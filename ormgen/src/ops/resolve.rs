//! Resolve operation - class name and file path of one qualified name.

use ormgen_codegen::NameResolver;
use ormgen_core::Language;

use crate::reports::ResolveReport;

/// Execute the resolve operation.
pub fn resolve(
    qualified: &str,
    prefix: &str,
    language: Language,
    extension: Option<&str>,
) -> ResolveReport {
    let resolver = match extension {
        Some(ext) => NameResolver::new(language).with_extension(ext),
        None => NameResolver::new(language),
    };

    let class_name = resolver.class_name(Some(qualified)).unwrap_or_default();
    let file_path = resolver.file_path(prefix, Some(class_name));
    let reserved = !class_name.is_empty() && resolver.naming().is_reserved(class_name);

    ResolveReport {
        qualified: qualified.to_string(),
        language,
        class_name: class_name.to_string(),
        file_path,
        reserved,
    }
}
