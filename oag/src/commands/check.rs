use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use oag_codegen::ClientCodegen;
use oag_codegen_go::GoCodegen;

use super::UnwrapOrExit;
use crate::config;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to a TOML config file with an [options] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set an option (overrides the config file)
    #[arg(short = 'p', long = "property", value_name = "NAME=VALUE")]
    pub properties: Vec<String>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let raw = config::load(self.config.as_deref(), &self.properties)?;

        let codegen = GoCodegen::new();
        let state = codegen.resolve(&raw).unwrap_or_exit();
        codegen.validate(&state).unwrap_or_exit();

        println!("configuration OK ({} options resolved)", state.len());
        Ok(())
    }
}
