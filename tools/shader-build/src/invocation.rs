//! Compiler invocations and the runners that execute them.
//!
//! An invocation is plain data. A [`CompilerRunner`] turns it into a
//! [`CompileStatus`], which keeps process spawning out of the driver so the
//! continuation policy can be tested with closures.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::unit::ShaderUnit;

/// Flag asking glslang to emit SPIR-V for Vulkan
pub const SPIRV_FLAG: &str = "-V";

/// Flag preceding the output path
pub const OUTPUT_FLAG: &str = "-o";

/// One external compiler call: `<program> -V <name> -o <name>.spv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn for_unit(compiler: &str, unit: &ShaderUnit) -> Self {
        Self {
            program: compiler.to_string(),
            args: vec![
                SPIRV_FLAG.to_string(),
                unit.name().to_string(),
                OUTPUT_FLAG.to_string(),
                unit.artifact_name(),
            ],
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of a single compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    /// Process ran to completion with this exit code
    Exited(i32),
    /// Process was killed by a signal and reported no exit code
    Terminated,
    /// Process could not be started (missing or unexecutable compiler)
    LaunchFailed(String),
}

impl CompileStatus {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {}", code),
            Self::Terminated => f.write_str("terminated by signal"),
            Self::LaunchFailed(reason) => write!(f, "failed to launch: {}", reason),
        }
    }
}

/// Executes compiler invocations.
pub trait CompilerRunner {
    fn run(&self, invocation: &Invocation) -> CompileStatus;
}

impl<F> CompilerRunner for F
where
    F: Fn(&Invocation) -> CompileStatus,
{
    fn run(&self, invocation: &Invocation) -> CompileStatus {
        self(invocation)
    }
}

/// Runs the compiler as a blocking child process.
///
/// stdout/stderr are inherited so compiler diagnostics reach the terminal
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the compiler from `dir` instead of the current directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(invocation.args.iter().map(OsString::from));
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl CompilerRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> CompileStatus {
        match self.command(invocation).status() {
            Ok(status) => match status.code() {
                Some(code) => CompileStatus::Exited(code),
                None => CompileStatus::Terminated,
            },
            Err(e) => CompileStatus::LaunchFailed(e.to_string()),
        }
    }
}
