//! Lints over a parsed manifest.
//!
//! Parsing already rejects class names that are empty or reserved. Lints
//! catch the collisions that only show up once names are resolved for the
//! target language.

mod class_reference;
mod duplicate_file;
mod reserved_accessor;
mod reserved_column;

pub use class_reference::ClassReferenceLint;
pub use duplicate_file::DuplicateFileLint;
use ormgen_manifest::Manifest;
pub use reserved_accessor::ReservedAccessorLint;
pub use reserved_column::ReservedColumnLint;

use crate::Diagnostic;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// All built-in lints, in the order they run.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(ClassReferenceLint),
        Box::new(DuplicateFileLint),
        Box::new(ReservedAccessorLint),
        Box::new(ReservedColumnLint),
    ]
}

/// Run every built-in lint against a manifest.
pub fn run_lints(manifest: &Manifest) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        lint.check(manifest, &mut diagnostics);
    }
    diagnostics
}
