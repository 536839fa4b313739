//! Bottom-up scope indexing.
//!
//! Every scope gets a [`ScopeIndex`]: the names it defines, the names
//! referenced in it or any descendant, and the subset of those that are still
//! free at this scope. Children are indexed before their parent merges them,
//! so a name climbs the graph until it meets a scope that defines it.

use jsphp_common::NameSet;
use jsphp_syntax::NodeArena;
use tracing::{Level, debug, span, trace};

use crate::annotations::{Annotations, ScopeIndex};
use crate::graph::{ScopeGraph, ScopeId, ScopeKind};

pub struct ScopeIndexer<'a> {
    arena: &'a NodeArena,
    graph: &'a ScopeGraph,
}

impl<'a> ScopeIndexer<'a> {
    pub fn new(arena: &'a NodeArena, graph: &'a ScopeGraph) -> Self {
        ScopeIndexer { arena, graph }
    }

    /// Index the whole graph from its root and return the root's index.
    ///
    /// An empty graph yields `None` and leaves `annotations` untouched.
    pub fn index(&self, annotations: &mut Annotations) -> Option<ScopeIndex> {
        let root = self.graph.root()?;
        let _span = span!(Level::DEBUG, "index_scopes", scopes = self.graph.len()).entered();
        let index = self.index_scope(root, annotations);
        debug!(
            free = index.unresolved.len(),
            referenced = index.referenced.len(),
            "root scope indexed"
        );
        Some(index)
    }

    fn index_scope(&self, id: ScopeId, annotations: &mut Annotations) -> ScopeIndex {
        let Some(scope) = self.graph.scope(id) else {
            return ScopeIndex::default();
        };

        // A named function expression's name lives in a wrapper scope around
        // the function scope. The wrapper takes on its child's index.
        if scope.kind == ScopeKind::FunctionExpressionName
            && let Some(&inner) = scope.children.first()
        {
            let index = self.index_scope(inner, annotations);
            annotations.scope_indexes.insert(scope.anchor, index.clone());
            return index;
        }

        let defined: NameSet = scope.variables.iter().map(|var| var.name.clone()).collect();
        let mut referenced = NameSet::default();
        let mut unresolved = NameSet::default();

        for reference in scope
            .references
            .iter()
            .filter_map(|&ref_id| self.graph.reference(ref_id))
        {
            let Some(name) = self.arena.identifier_name(reference.identifier) else {
                continue;
            };
            referenced.insert(name.to_string());
            if self.graph.resolved_scope(reference) != Some(id) {
                unresolved.insert(name.to_string());
            }
        }

        for &child in &scope.children {
            let child_index = self.index_scope(child, annotations);
            for name in child_index.unresolved {
                if !defined.contains(&name) {
                    unresolved.insert(name.clone());
                }
                referenced.insert(name);
            }
        }

        trace!(
            scope = id.0,
            kind = ?scope.kind,
            defined = defined.len(),
            unresolved = unresolved.len(),
            "scope indexed"
        );

        let index = ScopeIndex {
            defined,
            referenced,
            unresolved,
            this_found: scope.this_found,
        };
        annotations.scope_indexes.insert(scope.anchor, index.clone());
        index
    }
}

#[cfg(test)]
#[path = "indexer_tests.rs"]
mod indexer_tests;
