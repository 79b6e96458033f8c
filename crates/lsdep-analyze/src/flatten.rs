//! Breadth-first flattening of a dependency tree.

use std::fmt;

use itertools::Itertools;
use tracing::trace;

use lsdep_core::DependencyNode;

/// Every node below `root`, in level order. The root itself is excluded.
///
/// The result list doubles as the work queue: a cursor walks it from the
/// front while each visited node appends its children to the back, so all
/// siblings come out before any of their children.
pub fn dependency_list(root: &DependencyNode) -> Vec<&DependencyNode> {
    let mut dependencies: Vec<&DependencyNode> = root.children.iter().collect();

    let mut cursor = 0;
    while cursor < dependencies.len() {
        let dep = dependencies[cursor];
        dependencies.extend(dep.children.iter());
        cursor += 1;
    }

    trace!(root = %root.name, count = dependencies.len(), "flattened dependency tree");
    dependencies
}

/// Names of every node below `root`, in level order.
pub fn dependency_names(root: &DependencyNode) -> Vec<&str> {
    dependency_list(root)
        .into_iter()
        .map(|dep| dep.name.as_str())
        .collect()
}

/// Flattened dependencies of one tree, displayed as space-separated names.
#[derive(Debug, Clone)]
pub struct DependencyList<'a> {
    entries: Vec<&'a DependencyNode>,
}

impl<'a> DependencyList<'a> {
    /// Flatten the tree under `root`.
    pub fn new(root: &'a DependencyNode) -> Self {
        Self {
            entries: dependency_list(root),
        }
    }

    /// Number of dependencies in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for DependencyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().map(|dep| &dep.name).join(" "))
    }
}
