//! Core types for lsdep.
//!
//! This crate provides the data structures shared by the rest of the
//! workspace: dependency nodes, the parsed dependency tree, resolver
//! configuration and error types.

mod config;
mod error;
mod node;
mod tree;

pub use config::{DuplicatePolicy, ResolveConfig, ResolveConfigBuilder};
pub use error::ResolveError;
pub use node::DependencyNode;
pub use tree::{DependencyTree, ParseStats};
