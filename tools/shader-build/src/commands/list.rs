//! List command - print the units a build would compile

use anyhow::Result;
use clap::Args;

use super::ProjectArgs;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    let project_dir = args.project.project_dir()?;
    let manifest = args.project.load_manifest(&project_dir)?;
    let shaders = manifest.shader_list()?;

    for unit in &shaders {
        let stage = unit.stage().map_or("unknown", |s| s.as_str());
        println!("{:<24} {:<16} -> {}", unit.name(), stage, unit.artifact_name());
    }

    Ok(())
}
