//! Implicit declaration detection.
//!
//! In a hoisting-free target a `var` that is only ever initialized by
//! assignment needs a declaration synthesized where it is first assigned.
//! A variable qualifies when:
//!
//! - it was declared through a plain declarator (not a function declaration
//!   or a parameter),
//! - no direct child scope has its name free (a closure capturing it needs a
//!   real binding), and
//! - the first reference to its name in the declaring scope writes it:
//!   either a declarator initializer or the left side of an assignment.
//!
//! Qualifying names are recorded against the anchor node of the function or
//! program scope. The child-scope check only looks at names free in each
//! child: a child that redeclares the name binds its own uses and does not
//! block the candidate, so the outer variable is still marked.

use jsphp_syntax::{NodeArena, NodeData, NodeIndex};
use tracing::{Level, debug, span, trace};

use crate::annotations::Annotations;
use crate::graph::{Scope, ScopeGraph, Variable};

pub struct ImplicitAssignmentDetector<'a> {
    arena: &'a NodeArena,
    graph: &'a ScopeGraph,
}

impl<'a> ImplicitAssignmentDetector<'a> {
    pub fn new(arena: &'a NodeArena, graph: &'a ScopeGraph) -> Self {
        ImplicitAssignmentDetector { arena, graph }
    }

    /// Scan every function and global scope. Requires scope indexes to be
    /// present in `annotations` already.
    pub fn detect(&self, annotations: &mut Annotations) {
        let _span = span!(Level::DEBUG, "detect_implicit_vars").entered();
        let mut marked = 0usize;

        for (_, scope) in self
            .graph
            .scopes()
            .filter(|(_, scope)| scope.kind.is_hoisting_target())
        {
            for variable in &scope.variables {
                if !self.is_declarator_binding(variable) {
                    continue;
                }
                let name = variable.name.as_str();
                if self.used_lexically(scope, name, annotations) {
                    trace!(name, "captured by a child scope");
                    continue;
                }
                if self.first_reference_writes(scope, name) {
                    trace!(name, anchor = scope.anchor.0, "implicit declaration");
                    annotations.mark_implicit(scope.anchor, name);
                    marked += 1;
                }
            }
        }

        debug!(marked, "implicit declarations detected");
    }

    /// The first declaring identifier sits directly under a declarator.
    fn is_declarator_binding(&self, variable: &Variable) -> bool {
        let Some(&id) = variable.identifiers.first() else {
            return false;
        };
        matches!(
            self.arena.data(self.arena.parent(id)),
            Some(NodeData::VariableDeclarator { .. })
        )
    }

    /// Some direct child scope still has `name` free.
    fn used_lexically(&self, scope: &Scope, name: &str, annotations: &Annotations) -> bool {
        scope.children.iter().any(|&child| {
            self.graph
                .scope(child)
                .and_then(|child| annotations.scope_index(child.anchor))
                .is_some_and(|index| index.is_free(name))
        })
    }

    fn first_reference_writes(&self, scope: &Scope, name: &str) -> bool {
        let first = scope
            .references
            .iter()
            .filter_map(|&ref_id| self.graph.reference(ref_id))
            .find(|reference| self.arena.identifier_name(reference.identifier) == Some(name));
        first.is_some_and(|reference| self.is_initializing(reference.identifier))
    }

    /// `identifier` is the target of a declarator with an initializer, or the
    /// left side of an assignment.
    fn is_initializing(&self, identifier: NodeIndex) -> bool {
        match self.arena.data(self.arena.parent(identifier)) {
            Some(NodeData::VariableDeclarator { init, .. }) => init.is_some(),
            Some(NodeData::AssignmentExpression { left, .. }) => *left == identifier,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "implicit_tests.rs"]
mod implicit_tests;
