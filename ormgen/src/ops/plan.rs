//! Plan operation - class plans for every table.

use eyre::{Context, Result};
use ormgen_codegen::TablePlan;
use ormgen_manifest::Manifest;

use crate::reports::PlanReport;

/// Execute the plan operation.
pub fn plan(manifest: &Manifest) -> Result<PlanReport> {
    let plans = TablePlan::for_manifest(manifest).wrap_err("Failed to plan classes")?;

    Ok(PlanReport {
        language: manifest.generator.language,
        plans,
    })
}
