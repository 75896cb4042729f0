//! shader-build - compile GLSL shader sources to SPIR-V
//!
//! # Commands
//!
//! - `shader-build build` - Compile every shader in the manifest (default)
//! - `shader-build check` - Validate the manifest and locate the compiler
//! - `shader-build list` - Print the shaders and their output names
//!
//! # Usage
//!
//! In a directory with shader sources:
//! ```bash
//! # Compile everything (same as `shader-build build`)
//! shader-build
//!
//! # Keep the legacy behaviour of exiting 0 even when shaders fail
//! shader-build build --allow-failures
//! ```
//!
//! # Manifest (shaders.toml)
//!
//! ```toml
//! compiler = "glslangValidator"
//! shaders = ["simple.vert", "simple.frag", "GenSamples.comp"]
//! ```
//!
//! Each entry is compiled as `<compiler> -V <name> -o <name>.spv`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build, check, list};

/// shader-build - compile GLSL shader sources to SPIR-V
#[derive(Parser)]
#[command(name = "shader-build")]
#[command(about = "Compile GLSL shader sources to SPIR-V")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every shader in the manifest (default command)
    Build(build::BuildArgs),

    /// Validate the manifest and locate the compiler without compiling
    Check(check::CheckArgs),

    /// Print the shaders a build would compile
    List(list::ListArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Build(build::BuildArgs::default()));

    match command {
        Commands::Build(args) => {
            let code = build::execute(args)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Check(args) => check::execute(args),
        Commands::List(args) => list::execute(args),
    }
}
