//! Check command - validate the manifest and environment without compiling

use anyhow::{Context, Result};
use clap::Args;

use super::{find_compiler, ProjectArgs};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Compiler executable (overrides the manifest)
    #[arg(short, long)]
    pub compiler: Option<String>,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let project_dir = args.project.project_dir()?;
    let manifest = args.project.load_manifest(&project_dir)?;
    manifest.validate().context("Invalid shader manifest")?;

    let shaders = manifest.shader_list()?;
    let compiler = args.compiler.unwrap_or_else(|| manifest.compiler.clone());

    for name in shaders.duplicates() {
        tracing::warn!(
            "{} is listed more than once and will be compiled repeatedly",
            name
        );
    }

    for unit in &shaders {
        if unit.stage().is_none() {
            tracing::warn!("{} has no recognized shader stage extension", unit);
        }
        if !project_dir.join(unit.name()).is_file() {
            tracing::warn!("{} not found in {}", unit, project_dir.display());
        }
    }

    let compiler_path = find_compiler(&compiler, &project_dir)
        .with_context(|| format!("Compiler '{}' not found", compiler))?;
    tracing::info!("Compiler: {}", compiler_path.display());

    tracing::info!("Manifest is valid! ({} shaders)", shaders.len());
    Ok(())
}
