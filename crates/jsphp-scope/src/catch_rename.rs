//! Catch binding renaming.
//!
//! Catch parameters are scoped to their clause in the source but would share
//! the function scope in the target, so each one gets a unique suffix. Every
//! catch binding is renamed, whether or not anything would have collided.

use jsphp_syntax::NodeIndex;
use smallvec::SmallVec;
use tracing::{Level, debug, span, trace};

use crate::annotations::Annotations;
use crate::graph::{ScopeGraph, ScopeKind};

/// Source of rename suffixes. Never reuses a value, so two catch clauses
/// anywhere in the tree never share a suffix.
#[derive(Clone, Debug, Default)]
pub struct SuffixCounter {
    count: u32,
}

impl SuffixCounter {
    pub fn new() -> Self {
        SuffixCounter::default()
    }

    /// `_1_`, `_2_`, ...
    pub fn next_suffix(&mut self) -> String {
        self.count += 1;
        format!("_{}_", self.count)
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

pub struct CatchBindingRenamer<'a> {
    graph: &'a ScopeGraph,
}

impl<'a> CatchBindingRenamer<'a> {
    pub fn new(graph: &'a ScopeGraph) -> Self {
        CatchBindingRenamer { graph }
    }

    pub fn rename(&self, counter: &mut SuffixCounter, annotations: &mut Annotations) {
        let _span = span!(Level::DEBUG, "rename_catch_bindings").entered();
        let mut renamed = 0usize;

        for (id, scope) in self.graph.scopes() {
            if scope.kind != ScopeKind::Catch {
                continue;
            }
            let Some(param) = scope.variables.first() else {
                continue;
            };

            let mut identifiers: SmallVec<[NodeIndex; 8]> = SmallVec::new();
            identifiers.extend(param.identifiers.first().copied());
            identifiers.extend(
                param
                    .references
                    .iter()
                    .filter_map(|&ref_id| self.graph.reference(ref_id))
                    .map(|reference| reference.identifier),
            );

            let suffix = counter.next_suffix();
            trace!(scope = id.0, name = %param.name, %suffix, uses = identifiers.len(), "renaming catch binding");
            for identifier in identifiers {
                annotations.rename_suffixes.insert(identifier, suffix.clone());
            }
            renamed += 1;
        }

        debug!(renamed, "catch bindings renamed");
    }
}

#[cfg(test)]
#[path = "catch_rename_tests.rs"]
mod catch_rename_tests;
