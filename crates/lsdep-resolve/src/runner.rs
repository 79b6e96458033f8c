//! External dependency-tree tool invocation.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use lsdep_core::{ResolveConfig, ResolveError};

/// Captured result of one tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Standard output, handed to the parser.
    pub stdout: String,
    /// Standard error, surfaced on failure.
    pub stderr: String,
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

impl ToolOutput {
    /// Output of a run that exited with status 0.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            status: Some(0),
        }
    }

    /// Output of a run that exited with `status` and printed `stderr`.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            status: Some(status),
        }
    }

    /// Check if the tool exited with status 0.
    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Something that can produce the dependency-tree text for a binary.
pub trait ToolRunner {
    /// Run the tool against `binary` and capture its output.
    fn run(&self, config: &ResolveConfig, binary: &Path) -> Result<ToolOutput, ResolveError>;
}

/// Spawns the configured tool as a blocking subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct LddtreeRunner;

impl ToolRunner for LddtreeRunner {
    fn run(&self, config: &ResolveConfig, binary: &Path) -> Result<ToolOutput, ResolveError> {
        let args = config.tool_args();
        debug!(tool = %config.tool.display(), ?args, binary = %binary.display(), "running dependency tool");

        let output = Command::new(&config.tool)
            .args(args)
            .arg(binary)
            .output()
            .map_err(|source| ResolveError::Spawn {
                program: config.tool_name().into(),
                source,
            })?;

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

/// Closures stand in for the tool, mostly in tests.
impl<F> ToolRunner for F
where
    F: Fn(&Path) -> io::Result<ToolOutput>,
{
    fn run(&self, config: &ResolveConfig, binary: &Path) -> Result<ToolOutput, ResolveError> {
        self(binary).map_err(|source| ResolveError::Spawn {
            program: config.tool_name().into(),
            source,
        })
    }
}
