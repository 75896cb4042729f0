//! CLI subcommands. Each exposes an `Args` struct and an `execute` function.

pub mod build;
pub mod check;
pub mod list;

use anyhow::{Context, Result};
use clap::Args;
use shader_build::{ShaderManifest, MANIFEST_FILE};
use std::path::{Path, PathBuf};

/// Arguments shared by every command that reads a manifest
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    /// Directory holding the shader sources (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to a shaders.toml manifest (relative to project directory).
    /// Without it, <project>/shaders.toml is used if present, otherwise the
    /// bundled simple-render manifest.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.project {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to read current directory"),
        }
    }

    /// Resolve and load the manifest for `project_dir`
    pub fn load_manifest(&self, project_dir: &Path) -> Result<ShaderManifest> {
        if let Some(manifest) = &self.manifest {
            let path = project_dir.join(manifest);
            tracing::debug!("Using manifest {}", path.display());
            return Ok(ShaderManifest::load(&path)?);
        }

        let default_path = project_dir.join(MANIFEST_FILE);
        if default_path.is_file() {
            tracing::debug!("Using manifest {}", default_path.display());
            return Ok(ShaderManifest::load(&default_path)?);
        }

        tracing::debug!(
            "No {} in {}, using bundled manifest",
            MANIFEST_FILE,
            project_dir.display()
        );
        Ok(ShaderManifest::builtin()?)
    }
}

/// Locate `compiler` the way the OS would when spawning it from `project_dir`
pub fn find_compiler(compiler: &str, project_dir: &Path) -> which::Result<PathBuf> {
    which::which_in(compiler, std::env::var_os("PATH"), project_dir)
}
