//! Tracking of names and paths already attached to the tree.

use std::collections::HashMap;

use compact_str::CompactString;

/// Tracks every name and path present in the tree being built.
///
/// A library counts as present when the looked-up key equals either the
/// name or the path of any attached node. Each key remembers the slot of the
/// first node that introduced it.
#[derive(Debug, Default)]
pub struct SeenTracker {
    seen: HashMap<CompactString, usize>,
}

impl SeenTracker {
    /// Create a new, empty tracker.
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Track a node's name and path. Existing keys keep their first slot.
    pub fn track(&mut self, name: &str, path: &str, slot: usize) {
        self.seen.entry(name.into()).or_insert(slot);
        self.seen.entry(path.into()).or_insert(slot);
    }

    /// Slot of the first node introducing `key`.
    pub fn first_slot(&self, key: &str) -> Option<usize> {
        self.seen.get(key).copied()
    }
}
