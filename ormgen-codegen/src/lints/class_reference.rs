//! Lint for base class and interface names.

use ormgen_core::bare_class_name;
use ormgen_manifest::Manifest;

use super::Lint;
use crate::{Diagnostic, diagnostic::Location};

/// Lint that rejects base class and interface names with nothing after
/// their last delimiter (e.g. `App\`).
pub struct ClassReferenceLint;

impl Lint for ClassReferenceLint {
    fn name(&self) -> &'static str {
        "class-reference"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        check_reference(
            self.name(),
            "base class",
            &manifest.generator.base_class,
            Location::Generator("base_class"),
            diagnostics,
        );

        for (name, table) in &manifest.tables {
            if let Some(base) = &table.base_class {
                let location = Location::table_key(name, "base_class");
                check_reference(self.name(), "base class", base, location, diagnostics);
            }
            if let Some(iface) = &table.interface {
                let location = Location::table_key(name, "interface");
                check_reference(self.name(), "interface", iface, location, diagnostics);
            }
        }
    }
}

fn check_reference(
    lint: &'static str,
    kind: &str,
    qualified: &str,
    location: Location,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if bare_class_name(Some(qualified)).is_none_or(str::is_empty) {
        diagnostics.push(
            Diagnostic::error(
                lint,
                format!("{} '{}' does not end in a class name", kind, qualified),
            )
            .at(location),
        );
    }
}
