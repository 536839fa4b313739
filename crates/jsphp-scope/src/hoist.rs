//! Hoisting pre-pass.
//!
//! Runs over the bare syntax tree, before any scope graph exists. Every
//! `var` declaration and named function declaration is recorded against its
//! hoisting target: the nearest enclosing function, or the program.

use jsphp_syntax::{NodeArena, NodeData, NodeIndex};
use tracing::{Level, debug, span, trace};

use crate::annotations::Annotations;

/// Collects `vars`/`funcs` hoisting records into an [`Annotations`] table.
pub struct HoistCollector<'a> {
    arena: &'a NodeArena,
}

impl<'a> HoistCollector<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        HoistCollector { arena }
    }

    /// Walk the whole tree once in document order.
    pub fn collect(&self, annotations: &mut Annotations) {
        let _span = span!(Level::DEBUG, "collect_hoisting", nodes = self.arena.len()).entered();
        let mut vars = 0usize;
        let mut funcs = 0usize;

        self.arena.walk(self.arena.root(), |idx, data| match data {
            NodeData::VariableDeclaration { declarations } => {
                let Some(target) = self.arena.enclosing_hoisting_target(idx) else {
                    return;
                };
                let record = annotations.hoist_record_mut(target);
                for &declarator in declarations {
                    if let Some(name) = self.declarator_name(declarator) {
                        trace!(name, target = target.0, "hoisting var");
                        record.vars.insert(name.to_string());
                        vars += 1;
                    }
                }
            }
            NodeData::FunctionDeclaration { id, .. } => {
                let Some(name) = self.arena.identifier_name(*id) else {
                    return;
                };
                let Some(target) = self.arena.enclosing_hoisting_target(idx) else {
                    return;
                };
                trace!(name, target = target.0, "hoisting function");
                annotations
                    .hoist_record_mut(target)
                    .funcs
                    .insert(name.to_string(), idx);
                funcs += 1;
            }
            _ => {}
        });

        debug!(vars, funcs, "hoisting collected");
    }

    fn declarator_name(&self, declarator: NodeIndex) -> Option<&'a str> {
        match self.arena.data(declarator)? {
            NodeData::VariableDeclarator { id, .. } => self.arena.identifier_name(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "hoist_tests.rs"]
mod hoist_tests;
