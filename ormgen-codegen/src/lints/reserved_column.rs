//! Lint for column names that are reserved words.

use ormgen_manifest::Manifest;

use super::Lint;
use crate::{Diagnostic, diagnostic::Location, language::naming_for};

/// Lint that warns when a column's method-style name is a reserved word of
/// the target language. The generated name is escaped, so it no longer
/// matches the column name.
pub struct ReservedColumnLint;

impl Lint for ReservedColumnLint {
    fn name(&self) -> &'static str {
        "reserved-column"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let naming = naming_for(manifest.generator.language);

        for (table, definition) in &manifest.tables {
            for column in definition.columns.keys() {
                let name = (naming.method_name)(column);
                if naming.is_reserved(&name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "column '{}' is a {} reserved word and will be generated as '{}'",
                                column,
                                naming.language,
                                naming.safe_name(&name)
                            ),
                        )
                        .at(Location::column(table, column)),
                    );
                }
            }
        }
    }
}
