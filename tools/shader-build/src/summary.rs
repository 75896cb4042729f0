//! Aggregate outcome of a run and the policy turning it into an exit code.

use std::fmt;

use crate::driver::CompilationResult;
use crate::invocation::CompileStatus;

/// Counts and failures collected from a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub total: usize,
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, CompileStatus)>,
}

impl BuildSummary {
    pub fn from_results(results: &[CompilationResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            if result.succeeded() {
                summary.succeeded.push(result.unit.name().to_string());
            } else {
                summary
                    .failed
                    .push((result.unit.name().to_string(), result.status.clone()));
            }
        }
        summary
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} compiled, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// How a finished run maps to the process exit code.
///
/// Either way the driver has already attempted every unit; the policy only
/// decides what the caller reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Exit non-zero if any unit failed
    #[default]
    FailOnAny,
    /// Always exit zero, leaving failures to the compiler's own output
    BestEffort,
}

impl ExitPolicy {
    pub fn exit_code(&self, summary: &BuildSummary) -> i32 {
        match self {
            Self::FailOnAny if !summary.all_succeeded() => 1,
            _ => 0,
        }
    }
}
