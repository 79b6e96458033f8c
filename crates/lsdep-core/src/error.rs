//! Error types for resolving dependencies.

use std::path::PathBuf;

use compact_str::CompactString;
use thiserror::Error;

/// Errors that can occur while resolving a binary's dependencies.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The tool's output did not have the expected shape.
    #[error("Malformed tool output at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// The dependency tool exited with a non-zero status.
    #[error("Error running {tool} on {}: {stderr}", binary.display())]
    ExternalToolFailure {
        tool: CompactString,
        binary: PathBuf,
        status: Option<i32>,
        stderr: String,
    },

    /// The dependency tool could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: CompactString,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ResolveError {
    /// Create a malformed-input error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Check if this error came from the tool exiting unsuccessfully.
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ExternalToolFailure { .. })
    }
}
