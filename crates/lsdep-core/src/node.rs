//! Dependency node type.

use compact_str::CompactString;

/// A single binary or shared library in the dependency tree.
///
/// Children are owned by their parent; a tree built by the parser never
/// shares nodes between branches and cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// Short identifier, usually the library file name.
    pub name: CompactString,

    /// Fully resolved filesystem location.
    pub path: CompactString,

    /// Direct dependencies, in the order the tool listed them.
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a node with no children.
    pub fn new(name: impl Into<CompactString>, path: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Append a child as the last direct dependency.
    pub fn add_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }

    /// Builder-style variant of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.add_child(child);
        self
    }

    /// Count every node below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
