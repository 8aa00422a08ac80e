use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ormgen_manifest::OrmToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    /// Path to ormgen.toml (defaults to ./ormgen.toml)
    #[arg(short, long, default_value = "ormgen.toml")]
    pub config: PathBuf,

    /// Print plans as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let orm_toml = OrmToml::open(&self.config).unwrap_or_exit();
        let report = ops::plan(orm_toml.manifest())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.plans)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
