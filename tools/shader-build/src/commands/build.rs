//! Build command - compile every shader in the manifest
//!
//! Every unit is attempted even after failures. The exit code is decided
//! afterwards from the aggregate result.

use anyhow::{Context, Result};
use clap::Args;
use shader_build::{BuildSummary, ExitPolicy, ProcessRunner};

use super::{find_compiler, ProjectArgs};

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Compiler executable (overrides the manifest)
    #[arg(short, long)]
    pub compiler: Option<String>,

    /// Exit with success even if some shaders failed to compile
    #[arg(long)]
    pub allow_failures: bool,
}

/// Execute the build command
///
/// Returns the process exit code chosen by the exit policy.
pub fn execute(args: BuildArgs) -> Result<i32> {
    let project_dir = args.project.project_dir()?;
    let manifest = args.project.load_manifest(&project_dir)?;
    manifest.validate().context("Invalid shader manifest")?;

    let compiler = args.compiler.unwrap_or_else(|| manifest.compiler.clone());
    let shaders = manifest.shader_list()?;

    // Missing compiler is still attempted per unit; each shows up as a launch failure.
    if let Err(e) = find_compiler(&compiler, &project_dir) {
        tracing::warn!("Compiler '{}' not found: {}", compiler, e);
    }

    tracing::info!(
        "Compiling {} shaders in {} with {}",
        shaders.len(),
        project_dir.display(),
        compiler
    );

    let runner = ProcessRunner::in_dir(&project_dir);
    let results = shader_build::run(&shaders, &compiler, &runner);
    let summary = BuildSummary::from_results(&results);

    for (name, status) in &summary.failed {
        tracing::warn!("  {}: {}", name, status);
    }

    let policy = if args.allow_failures {
        ExitPolicy::BestEffort
    } else {
        ExitPolicy::FailOnAny
    };

    if summary.all_succeeded() {
        tracing::info!("Done! {}", summary);
    } else {
        tracing::error!("Done with errors: {}", summary);
    }

    Ok(policy.exit_code(&summary))
}
