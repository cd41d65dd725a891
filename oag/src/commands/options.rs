use clap::Args;
use eyre::Result;
use oag_codegen::ClientCodegen;
use oag_codegen_go::GoCodegen;

#[derive(Args)]
pub struct OptionsCommand {}

impl OptionsCommand {
    pub fn run(&self) -> Result<()> {
        let codegen = GoCodegen::new();

        println!("Options recognized by the {} backend:", codegen.language());
        println!();
        for spec in codegen.options().iter() {
            println!(
                "  {:<20} {:<8} (default: {})",
                spec.name,
                spec.kind.to_string(),
                spec.default
            );
            println!("      {}", spec.description);
        }

        Ok(())
    }
}
