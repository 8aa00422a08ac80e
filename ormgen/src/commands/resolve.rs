use clap::Args;
use eyre::Result;
use ormgen_core::Language;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResolveCommand {
    /// Qualified class name (e.g. Model.Base.User or Model\Base\User)
    pub qualified: String,

    /// Directory prefix for the generated file
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Target language
    #[arg(short, long, default_value = "php")]
    pub language: Language,

    /// File extension (defaults to the language's extension)
    #[arg(short, long)]
    pub extension: Option<String>,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::resolve(
            &self.qualified,
            &self.prefix,
            self.language,
            self.extension.as_deref(),
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_usable() {
            std::process::exit(1);
        }
        Ok(())
    }
}
