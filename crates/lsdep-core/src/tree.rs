//! Parsed dependency tree and parse statistics.

use compact_str::CompactString;

use crate::node::DependencyNode;

/// Counters collected while parsing tool output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-blank dependency lines consumed after the header.
    pub lines: usize,
    /// Nodes attached to the tree.
    pub attached: usize,
    /// Lines naming a library already present in the tree.
    pub duplicates: usize,
    /// Lines nested under a dropped duplicate.
    pub orphaned: usize,
    /// Deepest level reached by an attached node (root children are level 1).
    pub max_depth: usize,
}

impl ParseStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node attached at `level`.
    pub fn record_attached(&mut self, level: usize) {
        self.lines += 1;
        self.attached += 1;
        self.max_depth = self.max_depth.max(level);
    }

    /// Record a duplicate line.
    pub fn record_duplicate(&mut self) {
        self.lines += 1;
        self.duplicates += 1;
    }

    /// Record a line whose parent was never attached.
    pub fn record_orphan(&mut self) {
        self.lines += 1;
        self.orphaned += 1;
    }

    /// Lines that did not produce a reachable node.
    pub fn dropped(&self) -> usize {
        self.duplicates + self.orphaned
    }
}

/// A binary's dependency tree as reported by the dependency tool.
#[derive(Debug, Clone)]
pub struct DependencyTree {
    /// Dynamic linker declared by the binary.
    pub interpreter: CompactString,

    /// The binary itself.
    pub root: DependencyNode,

    /// Parse statistics.
    pub stats: ParseStats,
}

impl DependencyTree {
    /// Create a new dependency tree.
    pub fn new(
        interpreter: impl Into<CompactString>,
        root: DependencyNode,
        stats: ParseStats,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            root,
            stats,
        }
    }

    /// Number of dependencies below the root.
    pub fn dependency_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Check if any lines were dropped as duplicates or orphans.
    pub fn has_dropped_lines(&self) -> bool {
        self.stats.dropped() > 0
    }
}
