//! shader-build library
//!
//! Compiles a manifest of GLSL sources to SPIR-V by invoking an external
//! compiler (glslangValidator by default) once per source file. Each
//! `<name>` is written to `<name>.spv` next to it.

pub mod driver;
pub mod invocation;
pub mod manifest;
pub mod summary;
pub mod unit;

pub use driver::{run, CompilationResult};
pub use invocation::{CompileStatus, CompilerRunner, Invocation, ProcessRunner};
pub use manifest::{ManifestError, ShaderManifest, DEFAULT_COMPILER, MANIFEST_FILE};
pub use summary::{BuildSummary, ExitPolicy};
pub use unit::{ShaderList, ShaderStage, ShaderUnit};
