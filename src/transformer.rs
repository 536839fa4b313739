//! Annotation pipeline.
//!
//! ```text
//! parser -> HoistCollector -> resolver (external) -> ScopeIndexer
//!                                                 -> ImplicitAssignmentDetector
//!                                                 -> CatchBindingRenamer
//! ```
//!
//! The resolver sits between hoisting and indexing because it decides
//! hoisted bindings from the records the first pass leaves behind.

use jsphp_scope::{Annotations, HoistCollector, ScopeGraph, annotate_scopes};
use jsphp_syntax::NodeArena;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{Level, info, span};

/// Builds the scope graph for a hoisted tree. Implemented by the external
/// scope analysis; a prebuilt [`ScopeGraph`] resolves to itself.
pub trait ScopeResolver {
    fn resolve<'a>(&'a self, arena: &NodeArena, hoisting: &Annotations) -> Cow<'a, ScopeGraph>;
}

impl ScopeResolver for ScopeGraph {
    fn resolve<'a>(&'a self, _arena: &NodeArena, _hoisting: &Annotations) -> Cow<'a, ScopeGraph> {
        Cow::Borrowed(self)
    }
}

/// A serialized program: tree plus the resolver's scope graph.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgramInput {
    pub tree: NodeArena,
    pub scopes: ScopeGraph,
}

#[derive(Debug, Default)]
pub struct Transformer {
    annotations: Annotations,
}

impl Transformer {
    pub fn new() -> Self {
        Transformer::default()
    }

    /// Phase 1: record `vars`/`funcs` on every hoisting target.
    pub fn collect_hoisting(&mut self, arena: &NodeArena) {
        HoistCollector::new(arena).collect(&mut self.annotations);
    }

    /// Phases 2-4 over the resolver's graph. Re-running replaces the
    /// previous scope results.
    pub fn index_scopes(&mut self, arena: &NodeArena, graph: &ScopeGraph) {
        annotate_scopes(arena, graph, &mut self.annotations);
    }

    /// Run the whole pipeline, asking `resolver` for the scope graph once
    /// hoisting records exist.
    pub fn process(&mut self, arena: &NodeArena, resolver: &dyn ScopeResolver) -> &Annotations {
        let _span = span!(Level::INFO, "transform", nodes = arena.len()).entered();
        self.collect_hoisting(arena);
        let graph = resolver.resolve(arena, &self.annotations);
        self.index_scopes(arena, &graph);
        info!(scopes = graph.len(), "scope annotation complete");
        &self.annotations
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn into_annotations(self) -> Annotations {
        self.annotations
    }
}

impl ProgramInput {
    /// Restore parent links and run every pass over this program.
    pub fn annotate(&mut self) -> Annotations {
        self.tree.link_parents();
        let mut transformer = Transformer::new();
        transformer.process(&self.tree, &self.scopes);
        transformer.into_annotations()
    }
}
