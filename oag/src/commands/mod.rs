mod check;
mod completions;
mod options;
mod plan;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use options::OptionsCommand;
use plan::PlanCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for oag_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "oag")]
#[command(version)]
#[command(about = "Plan the output of a Go API client generator")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Plan(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Options(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the artifact plan and print the resolved path table
    Plan(PlanCommand),

    /// Validate the configuration without planning
    Check(CheckCommand),

    /// List the recognized configuration options
    Options(OptionsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
