mod check;
mod completions;
mod plan;
mod reserved;
mod resolve;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use plan::PlanCommand;
use reserved::ReservedCommand;
use resolve::ResolveCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ormgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ormgen")]
#[command(version)]
#[command(about = "Resolve names and paths for generated model classes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Reserved(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the class name and file path of a qualified name
    Resolve(ResolveCommand),

    /// Validate ormgen.toml and report naming collisions
    Check(CheckCommand),

    /// Show the class, file, base class and accessors of every table
    Plan(PlanCommand),

    /// List reserved words or reserved methods of a language
    Reserved(ReservedCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
