//! Runs the dependency tool and parses what it prints.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use lsdep_core::{DependencyTree, ResolveConfig, ResolveError};

use crate::parser::parse_with;
use crate::runner::ToolRunner;

/// Resolves a binary's dependency tree through a [`ToolRunner`].
#[derive(Debug, Clone)]
pub struct Resolver<R> {
    runner: R,
    config: ResolveConfig,
}

impl<R: ToolRunner> Resolver<R> {
    /// Create a resolver using `runner` and `config`.
    pub fn new(runner: R, config: ResolveConfig) -> Self {
        Self { runner, config }
    }

    /// Run the tool on `binary` and parse its output.
    ///
    /// A non-zero exit becomes [`ResolveError::ExternalToolFailure`] carrying
    /// the tool's standard error; nothing is parsed in that case.
    pub fn resolve(&self, binary: &Path) -> Result<DependencyTree, ResolveError> {
        let output = self.runner.run(&self.config, binary)?;

        if !output.is_success() {
            return Err(ResolveError::ExternalToolFailure {
                tool: self.config.tool_name().into(),
                binary: binary.to_path_buf(),
                status: output.status,
                stderr: output.stderr.trim_end().to_string(),
            });
        }

        let tree = parse_with(&output.stdout, self.config.duplicate_policy)?;
        debug!(
            binary = %binary.display(),
            interpreter = %tree.interpreter,
            dependencies = tree.dependency_count(),
            "resolved dependencies"
        );
        Ok(tree)
    }

    /// Like [`resolve`](Self::resolve), but a failed tool run is written to
    /// `report` and yields `None`. Callers must check for the absent tree
    /// before use.
    pub fn resolve_or_report(
        &self,
        binary: &Path,
        report: &mut impl Write,
    ) -> Result<Option<DependencyTree>, ResolveError> {
        match self.resolve(binary) {
            Ok(tree) => Ok(Some(tree)),
            Err(err) if err.is_tool_failure() => {
                // A closed report stream must not turn into a different failure.
                let _ = writeln!(report, "{err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
