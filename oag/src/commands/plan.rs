use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use oag_codegen::{EntitySet, path_table, plan_paths};
use oag_codegen_go::GoCodegen;

use super::UnwrapOrExit;
use crate::config;

#[derive(Args)]
pub struct PlanCommand {
    /// Path to a TOML config file with an [options] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set an option (overrides the config file)
    #[arg(short = 'p', long = "property", value_name = "NAME=VALUE")]
    pub properties: Vec<String>,

    /// Model name to instantiate model artifacts for (repeatable)
    #[arg(long = "model", value_name = "NAME")]
    pub models: Vec<String>,

    /// API group name to instantiate API artifacts for (repeatable)
    #[arg(long = "api", value_name = "NAME")]
    pub apis: Vec<String>,

    /// Output root the resolved paths are anchored at
    #[arg(short, long, default_value = oag_codegen_go::paths::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Emit the resolved paths as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let raw = config::load(self.config.as_deref(), &self.properties)?;
        let entities = EntitySet::new(self.models.clone(), self.apis.clone());

        let codegen = GoCodegen::new();
        let (_, paths) = plan_paths(&codegen, &raw, &entities, &self.output).unwrap_or_exit();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&paths)?);
        } else {
            println!("{}", path_table(&paths));
        }

        Ok(())
    }
}
