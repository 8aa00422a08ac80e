//! Lint for boolean accessors that shadow inherited methods or reserved words.

use ormgen_manifest::Manifest;

use super::Lint;
use crate::{
    BooleanAccessor, Diagnostic, boolean_accessor_name, diagnostic::Location, language::naming_for,
};

/// Lint that warns when a boolean column's `is` accessor would shadow a
/// method of the generated base class (e.g. a column `new` in PHP).
///
/// The accessor is skipped; the column's default getter is still generated.
/// An accessor named like a reserved word (e.g. `isSet` in PHP) is escaped
/// instead, and warned about too.
pub struct ReservedAccessorLint;

impl Lint for ReservedAccessorLint {
    fn name(&self) -> &'static str {
        "reserved-accessor"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let naming = naming_for(manifest.generator.language);

        for entry in manifest.entries() {
            for accessor in BooleanAccessor::for_table(naming, entry) {
                let location = Location::column(entry.name, &accessor.column);
                if accessor.skipped {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "accessor '{}' for boolean column '{}' would shadow an inherited method and is not generated",
                                accessor.name, accessor.column
                            ),
                        )
                        .at(location),
                    );
                } else if accessor.escaped {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "accessor '{}' for boolean column '{}' is a {} reserved word and will be generated as '{}'",
                                boolean_accessor_name(naming, &accessor.column),
                                accessor.column,
                                naming.language,
                                accessor.name
                            ),
                        )
                        .at(location),
                    );
                }
            }
        }
    }
}
