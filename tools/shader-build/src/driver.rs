//! Compilation driver
//!
//! Walks the shader list in order and invokes the compiler once per unit.
//! A failed unit never stops the walk; every unit is attempted exactly once
//! and gets exactly one result.

use crate::invocation::{CompileStatus, CompilerRunner, Invocation};
use crate::unit::{ShaderList, ShaderUnit};

/// Per-unit outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationResult {
    pub unit: ShaderUnit,
    pub status: CompileStatus,
}

impl CompilationResult {
    pub fn succeeded(&self) -> bool {
        self.status.succeeded()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.status.exit_code()
    }

    pub fn artifact_name(&self) -> String {
        self.unit.artifact_name()
    }
}

/// Compile every unit in `list` with `compiler`, sequentially.
///
/// Returns one result per unit, in list order, regardless of failures.
pub fn run<R>(list: &ShaderList, compiler: &str, runner: &R) -> Vec<CompilationResult>
where
    R: CompilerRunner + ?Sized,
{
    let total = list.len();
    let mut results = Vec::with_capacity(total);

    for (index, unit) in list.iter().enumerate() {
        let invocation = Invocation::for_unit(compiler, unit);
        tracing::info!("[{}/{}] Compiling {}", index + 1, total, unit);
        tracing::debug!("  {}", invocation);

        let status = runner.run(&invocation);
        if !status.succeeded() {
            tracing::warn!("{} failed ({})", unit, status);
        }

        results.push(CompilationResult {
            unit: unit.clone(),
            status,
        });
    }

    results
}
