//! lsdep - list the transitive shared-library dependencies of an executable.
//!
//! Usage:
//!   lsdep <elf_file>
//!
//! Runs `lddtree -a <elf_file>` and prints every library it depends on,
//! breadth-first, separated by spaces.
//!
//! Environment:
//!   LSDEP_TOOL        dependency-tree tool to run (default: lddtree)
//!   LSDEP_DUPLICATES  `drop` (default) or `reparent`
//!   RUST_LOG          log filter for diagnostics on stderr (default: warn)

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lsdep_analyze::DependencyList;
use lsdep_core::{DuplicatePolicy, ResolveConfig, ResolveError};
use lsdep_resolve::{LddtreeRunner, Resolver};

const TOOL_ENV: &str = "LSDEP_TOOL";
const DUPLICATES_ENV: &str = "LSDEP_DUPLICATES";

#[derive(Parser)]
#[command(
    name = "lsdep",
    version,
    about = "List the transitive shared-library dependencies of an executable"
)]
struct Cli {
    /// Executable to inspect
    #[arg(allow_hyphen_values = true)]
    elf_file: PathBuf,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors exit with 1, not clap's default 2.
            let _ = err.print();
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging();

    let config = config_from_env()?;
    let resolver = Resolver::new(LddtreeRunner, config);

    let Some(tree) = resolver
        .resolve_or_report(&cli.elf_file, &mut io::stderr())
        .wrap_err_with(|| format!("Failed to resolve {}", cli.elf_file.display()))?
    else {
        return Ok(ExitCode::FAILURE);
    };

    if tree.has_dropped_lines() {
        debug!(
            duplicates = tree.stats.duplicates,
            orphaned = tree.stats.orphaned,
            "dropped repeated dependency lines"
        );
    }

    let dependencies = DependencyList::new(&tree.root);
    debug!(interpreter = %tree.interpreter, count = dependencies.len(), "resolved");
    println!("{dependencies}");

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so stdout carries only the dependency list.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

/// Build the resolver config, applying environment overrides.
fn config_from_env() -> Result<ResolveConfig> {
    let mut builder = ResolveConfig::builder();

    if let Some(tool) = env::var_os(TOOL_ENV) {
        builder.tool(tool);
    }

    if let Ok(policy) = env::var(DUPLICATES_ENV) {
        let policy: DuplicatePolicy = policy
            .parse()
            .wrap_err_with(|| format!("Invalid {DUPLICATES_ENV} value {policy:?}"))?;
        builder.duplicate_policy(policy);
    }

    let config = builder.build().map_err(|e| ResolveError::InvalidConfig {
        message: e.to_string(),
    })?;
    Ok(config)
}
