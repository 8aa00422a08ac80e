//! Plan command report data structures.

use ormgen_codegen::TablePlan;
use ormgen_core::Language;

use super::output::{Output, Report};

/// Report data from planning every table.
#[derive(Debug)]
pub struct PlanReport {
    /// Target language.
    pub language: Language,
    /// One plan per table, in declaration order.
    pub plans: Vec<TablePlan>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} classes ({})", self.plans.len(), self.language));

        for plan in &self.plans {
            let class = &plan.class;
            out.newline();
            out.key_value(&plan.table, &class.class_name);
            out.key_value_indented("file", &class.file_path);
            out.key_value_indented("extends", &class.base_class);
            if let Some(iface) = &class.interface {
                out.key_value_indented("implements", iface);
            }
            for accessor in &plan.accessors {
                if accessor.skipped {
                    out.list_item(&format!("{} (skipped, reserved method)", accessor.name));
                } else if accessor.escaped {
                    out.list_item(&format!("{} (escaped, reserved word)", accessor.name));
                } else {
                    out.list_item(&accessor.name);
                }
            }
        }
    }
}
