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
pub struct CheckCommand {
    /// Path to ormgen.toml (defaults to ./ormgen.toml)
    #[arg(short, long, default_value = "ormgen.toml")]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let orm_toml = OrmToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(orm_toml.manifest(), orm_toml.path());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
