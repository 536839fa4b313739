//! Scope annotation passes for the jsphp transformer.
//!
//! Input is a syntax tree ([`jsphp_syntax::NodeArena`]) and the scope graph an
//! external resolver built over it ([`ScopeGraph`]). Output is an
//! [`Annotations`] side table read by the code generator.
//!
//! Pass order:
//! 1. [`HoistCollector`] on the bare tree, before the resolver runs.
//! 2. [`ScopeIndexer`], bottom-up over the graph.
//! 3. [`ImplicitAssignmentDetector`], which reads the indexes from step 2.
//! 4. [`CatchBindingRenamer`], independent of 2 and 3.

pub mod graph;
pub use graph::{Reference, ReferenceId, Scope, ScopeGraph, ScopeId, ScopeKind, Variable, VariableRef};

pub mod annotations;
pub use annotations::{AnnotationReport, Annotations, HoistRecord, ScopeIndex};

pub mod hoist;
pub use hoist::HoistCollector;

pub mod indexer;
pub use indexer::ScopeIndexer;

pub mod implicit;
pub use implicit::ImplicitAssignmentDetector;

pub mod catch_rename;
pub use catch_rename::{CatchBindingRenamer, SuffixCounter};

/// Run passes 2-4 over an already hoisted tree and its scope graph.
///
/// Results of an earlier run are discarded first, so calling this twice on
/// the same input produces the same annotations.
pub fn annotate_scopes(arena: &jsphp_syntax::NodeArena, graph: &ScopeGraph, annotations: &mut Annotations) {
    annotations.clear_scope_results();
    ScopeIndexer::new(arena, graph).index(annotations);
    ImplicitAssignmentDetector::new(arena, graph).detect(annotations);
    let mut counter = SuffixCounter::new();
    CatchBindingRenamer::new(graph).rename(&mut counter, annotations);
}
