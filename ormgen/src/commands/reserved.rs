use clap::Args;
use eyre::Result;
use ormgen_core::Language;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ReservedCommand {
    /// Target language
    #[arg(short, long, default_value = "php")]
    pub language: Language,

    /// List reserved methods instead of reserved words
    #[arg(short, long)]
    pub methods: bool,

    /// Check whether a single name is reserved
    pub name: Option<String>,
}

impl ReservedCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::reserved(self.language, self.methods, self.name.as_deref());
        report.render(&mut TerminalOutput::new());

        if report.is_hit() {
            std::process::exit(1);
        }
        Ok(())
    }
}
