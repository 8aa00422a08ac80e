//! Check operation - manifest lints.

use std::path::Path;

use ormgen_codegen::lints::run_lints;
use ormgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already rejected malformed manifests, so this only runs the lints.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics: run_lints(manifest),
    }
}
