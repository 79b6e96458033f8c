//! Parser for indented dependency-tree output.
//!
//! The first line names the binary and its interpreter:
//!
//! ```text
//! prog => /usr/bin/prog (/lib64/ld-linux-x86-64.so.2)
//! ```
//!
//! Every following line is `<name> => <path>`, nested by leading whitespace.
//! The raw whitespace count is the depth key, so any consistent indentation
//! width works.

use std::mem;

use compact_str::CompactString;
use tracing::{debug, trace};

use lsdep_core::{DependencyNode, DependencyTree, DuplicatePolicy, ParseStats, ResolveError};

use crate::seen::SeenTracker;

const SEPARATOR: &str = " => ";
const ROOT: usize = 0;

/// Parse tool output, dropping anything nested under a duplicate.
pub fn parse(output: &str) -> Result<DependencyTree, ResolveError> {
    parse_with(output, DuplicatePolicy::Drop)
}

/// Parse tool output with an explicit duplicate policy.
pub fn parse_with(output: &str, policy: DuplicatePolicy) -> Result<DependencyTree, ResolveError> {
    let mut lines = output.lines().enumerate();
    let (_, header) = lines
        .next()
        .ok_or_else(|| ResolveError::malformed(1, "empty output"))?;
    let (interpreter, mut builder) = TreeBuilder::from_header(header)?;

    for (index, raw) in lines {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let content = line.trim_start();
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        let (name, path) = content.split_once(SEPARATOR).ok_or_else(|| {
            ResolveError::malformed(index + 1, format!("expected `<name>{SEPARATOR}<path>`"))
        })?;

        builder.push_line(indent, name, path, policy);
    }

    let (root, stats) = builder.finish();
    debug!(
        interpreter = %interpreter,
        attached = stats.attached,
        duplicates = stats.duplicates,
        orphaned = stats.orphaned,
        "parsed dependency tree"
    );

    Ok(DependencyTree::new(interpreter, root, stats))
}

/// Split the header into the interpreter and the root node.
fn parse_header(header: &str) -> Result<(&str, &str, &str), ResolveError> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ResolveError::malformed(
            1,
            format!("header needs at least 3 fields, found {}", tokens.len()),
        ));
    }

    let interpreter = tokens[tokens.len() - 1]
        .trim_end_matches(')')
        .trim_start_matches('(');
    Ok((tokens[0], tokens[2], interpreter))
}

/// A node staged while parsing. Children are slot indices.
#[derive(Debug)]
struct Slot {
    name: CompactString,
    path: CompactString,
    level: usize,
    children: Vec<usize>,
}

/// An open ancestor on the depth stack.
///
/// `slot` is `None` when the line was not attached; anything nested under
/// it can never become reachable.
#[derive(Debug, Clone, Copy)]
struct Open {
    indent: usize,
    slot: Option<usize>,
}

/// Depth-stack tree construction over an index arena.
struct TreeBuilder {
    slots: Vec<Slot>,
    stack: Vec<Open>,
    seen: SeenTracker,
    stats: ParseStats,
}

impl TreeBuilder {
    fn from_header(header: &str) -> Result<(CompactString, Self), ResolveError> {
        let (name, path, interpreter) = parse_header(header)?;

        let mut seen = SeenTracker::new();
        seen.track(name, path, ROOT);

        let builder = Self {
            slots: vec![Slot {
                name: name.into(),
                path: path.into(),
                level: 0,
                children: Vec::new(),
            }],
            stack: Vec::new(),
            seen,
            stats: ParseStats::new(),
        };
        Ok((interpreter.into(), builder))
    }

    /// The nearest open ancestor. The root sits below the stack and is never popped.
    fn parent(&self) -> Option<usize> {
        self.stack.last().map_or(Some(ROOT), |open| open.slot)
    }

    fn push_line(&mut self, indent: usize, name: &str, path: &str, policy: DuplicatePolicy) {
        while self.stack.last().is_some_and(|open| open.indent >= indent) {
            self.stack.pop();
        }

        if let Some(first) = self.seen.first_slot(name) {
            self.stats.record_duplicate();
            debug!(name, path, "skipping duplicate dependency");
            let slot = match policy {
                DuplicatePolicy::Drop => None,
                DuplicatePolicy::Reparent => Some(first),
            };
            self.stack.push(Open { indent, slot });
            return;
        }

        let Some(parent) = self.parent() else {
            self.stats.record_orphan();
            debug!(name, path, "dependency nested under a dropped duplicate");
            self.stack.push(Open { indent, slot: None });
            return;
        };

        let slot = self.slots.len();
        let level = self.slots[parent].level + 1;
        self.slots.push(Slot {
            name: name.into(),
            path: path.into(),
            level,
            children: Vec::new(),
        });
        self.slots[parent].children.push(slot);
        self.seen.track(name, path, slot);
        self.stats.record_attached(level);
        trace!(name, path, level, "attached dependency");

        self.stack.push(Open {
            indent,
            slot: Some(slot),
        });
    }

    fn finish(mut self) -> (DependencyNode, ParseStats) {
        let root = materialize(&mut self.slots, ROOT);
        (root, self.stats)
    }
}

/// Move a staged slot and its subtree into an owned node.
fn materialize(slots: &mut [Slot], index: usize) -> DependencyNode {
    let children = mem::take(&mut slots[index].children);
    let mut node = DependencyNode::new(
        mem::take(&mut slots[index].name),
        mem::take(&mut slots[index].path),
    );
    node.children = children
        .into_iter()
        .map(|child| materialize(slots, child))
        .collect();
    node
}
