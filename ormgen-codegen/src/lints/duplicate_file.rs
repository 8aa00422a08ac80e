//! Lint for tables that resolve to the same output file.

use indexmap::IndexMap;
use ormgen_manifest::Manifest;

use super::Lint;
use crate::{Diagnostic, NameResolver, diagnostic::Location};

/// Lint that rejects two tables writing the same generated file.
///
/// Different qualified names can share a bare class name
/// (`Model.User` and `Admin\User`), and tables with the same prefix then
/// overwrite each other.
pub struct DuplicateFileLint;

impl Lint for DuplicateFileLint {
    fn name(&self) -> &'static str {
        "duplicate-file"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let resolver = NameResolver::from_config(&manifest.generator);
        let mut seen: IndexMap<String, &str> = IndexMap::new();

        for entry in manifest.entries() {
            let qualified = entry.qualified_name();
            let Some(class) = resolver
                .class_name(Some(&*qualified))
                .filter(|c| !c.is_empty())
            else {
                continue;
            };

            let path = resolver.file_path(entry.prefix(), Some(class));
            if let Some(first) = seen.get(&path) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "tables '{}' and '{}' both generate '{}'",
                            first, entry.name, path
                        ),
                    )
                    .at(Location::table(entry.name)),
                );
            } else {
                seen.insert(path, entry.name);
            }
        }
    }
}
