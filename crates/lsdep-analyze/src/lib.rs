//! Analysis of parsed dependency trees.
//!
//! The main operation is flattening: turning the nested tree into one
//! ordered list, breadth-first, with the root binary left out.
//!
//! ```rust
//! use lsdep_analyze::{DependencyList, DependencyNode};
//!
//! let root = DependencyNode::new("prog", "/bin/prog")
//!     .with_child(DependencyNode::new("a", "/lib/a").with_child(DependencyNode::new("c", "/lib/c")))
//!     .with_child(DependencyNode::new("b", "/lib/b"));
//!
//! assert_eq!(DependencyList::new(&root).to_string(), "a b c");
//! ```

mod flatten;

pub use flatten::{DependencyList, dependency_list, dependency_names};

// Re-export core types
pub use lsdep_core::{DependencyNode, DependencyTree};
