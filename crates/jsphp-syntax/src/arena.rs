//! NodeArena: owns every node of one program.
//!
//! Trees are built bottom-up: children are allocated first, and allocating a
//! parent stamps the `parent` back-reference on each child it names. A tree
//! that arrives serialized can have its back-references rebuilt with
//! [`NodeArena::link_parents`].

use jsphp_common::limits::MAX_ANCESTOR_WALK;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::node::{Node, NodeData, NodeIndex};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
    #[serde(default)]
    root: NodeIndex,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            root: NodeIndex::NONE,
        }
    }

    /// Append a node and return its index.
    ///
    /// Every child referenced by `data` gets its parent set to the new node.
    /// A `Program` node becomes the arena root.
    pub fn alloc(&mut self, data: NodeData) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        for child in data.children() {
            if let Some(node) = self.nodes.get_mut(child.index()) {
                node.parent = idx;
            }
        }
        if matches!(data, NodeData::Program { .. }) {
            self.root = idx;
        }
        self.nodes.push(Node::new(data));
        idx
    }

    /// Shorthand for allocating an `Identifier`.
    pub fn identifier(&mut self, name: &str) -> NodeIndex {
        self.alloc(NodeData::Identifier {
            name: name.to_string(),
        })
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.index())
    }

    #[inline]
    pub fn data(&self, idx: NodeIndex) -> Option<&NodeData> {
        self.get(idx).map(|node| &node.data)
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of `idx`, or `NodeIndex::NONE` for the root and unknown nodes.
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        self.get(idx).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn children(&self, idx: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        self.data(idx).map(NodeData::children).unwrap_or_default()
    }

    pub fn identifier_name(&self, idx: NodeIndex) -> Option<&str> {
        self.get(idx).and_then(Node::identifier_name)
    }

    /// Walk from the parent of `idx` up to the root.
    pub fn ancestors(&self, idx: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: self.parent(idx),
            steps: 0,
        }
    }

    /// Nearest ancestor of `idx` that is a hoisting target (a function or the
    /// program). Intervening blocks, catch clauses and statements are skipped.
    pub fn enclosing_hoisting_target(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.ancestors(idx).find(|&ancestor| {
            self.data(ancestor)
                .is_some_and(NodeData::is_hoisting_target)
        })
    }

    /// Recompute every parent back-reference by walking down from the root.
    ///
    /// Nodes unreachable from the root keep `NodeIndex::NONE` as parent.
    pub fn link_parents(&mut self) {
        for node in &mut self.nodes {
            node.parent = NodeIndex::NONE;
        }
        if self.root.is_none() {
            if let Some(pos) = self
                .nodes
                .iter()
                .position(|node| matches!(node.data, NodeData::Program { .. }))
            {
                self.root = NodeIndex(pos as u32);
            }
        }
        if self.get(self.root).is_none() {
            warn!("link_parents: arena has no program root");
            return;
        }

        let mut linked = 0usize;
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            for child in self.children(idx) {
                let Some(node) = self.nodes.get_mut(child.index()) else {
                    continue;
                };
                if node.parent.is_some() || child == self.root {
                    // Shared or cyclic child: keep the first parent seen.
                    continue;
                }
                node.parent = idx;
                linked += 1;
                stack.push(child);
            }
        }
        debug!(nodes = self.nodes.len(), linked, "linked parent references");
    }

    /// Pre-order traversal from `start`, children in document order.
    ///
    /// Each node is visited at most once, so shared or cyclic child lists
    /// terminate.
    pub fn walk(&self, start: NodeIndex, mut visit: impl FnMut(NodeIndex, &NodeData)) {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            let Some(data) = self.data(idx) else {
                continue;
            };
            if std::mem::replace(&mut seen[idx.index()], true) {
                continue;
            }
            visit(idx, data);
            let children = data.children();
            stack.extend(children.into_iter().rev());
        }
    }
}

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
    steps: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.current.is_none() || self.steps >= MAX_ANCESTOR_WALK {
            return None;
        }
        let idx = self.current;
        self.current = self.arena.parent(idx);
        self.steps += 1;
        Some(idx)
    }
}

#[cfg(test)]
#[path = "arena_unit_tests.rs"]
mod arena_unit_tests;
