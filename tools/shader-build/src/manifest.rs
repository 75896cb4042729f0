//! shaders.toml manifest parsing
//!
//! The manifest names the compiler and the ordered list of sources to build.
//! A default manifest for the simple-render sample ships inside the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::unit::ShaderList;

/// Default manifest file name looked up in the project directory
pub const MANIFEST_FILE: &str = "shaders.toml";

/// Compiler used when the manifest does not name one
pub const DEFAULT_COMPILER: &str = "glslangValidator";

const BUILTIN_MANIFEST: &str = include_str!("../manifests/simple_render.toml");

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse shader manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Manifest lists no shaders")]
    Empty,

    #[error("Shader name must not be empty")]
    EmptyName,

    #[error("Compiler executable name must not be empty")]
    EmptyCompiler,
}

/// shaders.toml manifest structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderManifest {
    /// Compiler executable, resolved through PATH
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Source files in invocation order
    pub shaders: Vec<String>,
}

fn default_compiler() -> String {
    DEFAULT_COMPILER.to_string()
}

impl ShaderManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Manifest bundled with the tool (simple-render sample shaders)
    pub fn builtin() -> Result<Self, ManifestError> {
        Self::parse(BUILTIN_MANIFEST)
    }

    /// Validate manifest fields
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.compiler.trim().is_empty() {
            return Err(ManifestError::EmptyCompiler);
        }
        if self.shaders.is_empty() {
            return Err(ManifestError::Empty);
        }
        self.shader_list().map(|_| ())
    }

    /// Ordered shader list for a run
    pub fn shader_list(&self) -> Result<ShaderList, ManifestError> {
        ShaderList::new(self.shaders.iter().cloned())
    }
}
