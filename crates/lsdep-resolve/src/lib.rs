//! Dependency resolution for lsdep.
//!
//! This crate runs the external dependency-tree tool (`lddtree` by default)
//! and turns its indented text output into a [`DependencyTree`].
//!
//! # Overview
//!
//! - **Runner** - spawns the tool and captures its output; any closure can
//!   stand in for it in tests
//! - **Parser** - single-pass, depth-stack parser with global duplicate
//!   suppression
//! - **Resolver** - ties the two together and applies [`ResolveConfig`]
//!
//! # Example
//!
//! ```rust,no_run
//! use lsdep_resolve::{LddtreeRunner, ResolveConfig, Resolver};
//!
//! let resolver = Resolver::new(LddtreeRunner, ResolveConfig::default());
//! let tree = resolver.resolve("/bin/ls".as_ref()).unwrap();
//!
//! println!("Interpreter: {}", tree.interpreter);
//! println!("Dependencies: {}", tree.dependency_count());
//! ```
//!
//! # Parsing canned output
//!
//! ```rust
//! let output = "prog => /bin/prog (/lib/ld.so)\n  libc.so.6 => /lib/libc.so.6\n";
//! let tree = lsdep_resolve::parse(output).unwrap();
//! assert_eq!(tree.root.children[0].name, "libc.so.6");
//! ```

mod parser;
mod resolver;
mod runner;
mod seen;

pub use parser::{parse, parse_with};
pub use resolver::Resolver;
pub use runner::{LddtreeRunner, ToolOutput, ToolRunner};
pub use seen::SeenTracker;

// Re-export core types for convenience
pub use lsdep_core::{
    DependencyNode, DependencyTree, DuplicatePolicy, ParseStats, ResolveConfig, ResolveError,
};
