//! Check command report data structures.

use std::path::PathBuf;

use ormgen_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from manifest lints.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Lint diagnostics, in lint order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in self.errors().chain(self.warnings()) {
            let mut msg = format!("{}[{}]: {}", diag.severity, diag.lint, diag.message);
            if let Some(loc) = &diag.location {
                msg.push_str(&format!("\n  --> {}", loc));
            }
            out.warning(&msg);
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.line(&format!("✓ {} is valid", self.config_path.display()));
        }
    }
}
