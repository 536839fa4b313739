//! Annotation side tables.
//!
//! The passes never write into the syntax tree. Everything they derive is
//! stored here, keyed by the `NodeIndex` of the node it describes, and the
//! code generator reads it back through the accessors below.

use jsphp_common::{NameMap, NameSet};
use jsphp_syntax::{NodeArena, NodeIndex};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;

/// Names hoisted to one function or program node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HoistRecord {
    /// Names introduced by `var` declarations anywhere below the function,
    /// up to the next function boundary.
    pub vars: NameSet,
    /// Named function declarations. A later declaration of the same name
    /// replaces the earlier node.
    pub funcs: NameMap<NodeIndex>,
}

/// What a scope defines, what it (or any descendant) references, and which
/// of those references are still free at this scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeIndex {
    pub defined: NameSet,
    pub referenced: NameSet,
    /// Always a subset of `referenced`, disjoint from `defined` for merged
    /// child names.
    pub unresolved: NameSet,
    pub this_found: bool,
}

impl ScopeIndex {
    #[inline]
    pub fn is_free(&self, name: &str) -> bool {
        self.unresolved.contains(name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Annotations {
    pub(crate) hoisting: FxHashMap<NodeIndex, HoistRecord>,
    pub(crate) scope_indexes: FxHashMap<NodeIndex, ScopeIndex>,
    pub(crate) implicit_vars: FxHashMap<NodeIndex, NameSet>,
    pub(crate) rename_suffixes: FxHashMap<NodeIndex, String>,
}

impl Annotations {
    pub fn new() -> Annotations {
        Annotations::default()
    }

    pub fn hoist_record(&self, node: NodeIndex) -> Option<&HoistRecord> {
        self.hoisting.get(&node)
    }

    pub(crate) fn hoist_record_mut(&mut self, node: NodeIndex) -> &mut HoistRecord {
        self.hoisting.entry(node).or_default()
    }

    pub fn scope_index(&self, anchor: NodeIndex) -> Option<&ScopeIndex> {
        self.scope_indexes.get(&anchor)
    }

    pub fn implicit_vars(&self, node: NodeIndex) -> Option<&NameSet> {
        self.implicit_vars.get(&node)
    }

    pub fn is_implicit(&self, node: NodeIndex, name: &str) -> bool {
        self.implicit_vars
            .get(&node)
            .is_some_and(|names| names.contains(name))
    }

    pub(crate) fn mark_implicit(&mut self, node: NodeIndex, name: &str) {
        self.implicit_vars
            .entry(node)
            .or_default()
            .insert(name.to_string());
    }

    pub fn rename_suffix(&self, identifier: NodeIndex) -> Option<&str> {
        self.rename_suffixes.get(&identifier).map(String::as_str)
    }

    /// Identifier text as the generator should print it: the source name
    /// followed by its rename suffix, if any.
    pub fn printed_name<'a>(&self, arena: &'a NodeArena, identifier: NodeIndex) -> Option<Cow<'a, str>> {
        let name = arena.identifier_name(identifier)?;
        Some(match self.rename_suffix(identifier) {
            Some(suffix) => Cow::Owned(format!("{name}{suffix}")),
            None => Cow::Borrowed(name),
        })
    }

    /// Drop the results of the scope-graph passes, keeping hoisting records.
    pub(crate) fn clear_scope_results(&mut self) {
        self.scope_indexes.clear();
        self.implicit_vars.clear();
        self.rename_suffixes.clear();
    }

    /// Flatten the side tables into a deterministic, serializable report.
    pub fn to_report(&self) -> AnnotationReport {
        fn sorted<V: Clone>(map: &FxHashMap<NodeIndex, V>) -> Vec<(NodeIndex, V)> {
            let mut entries: Vec<(NodeIndex, V)> =
                map.iter().map(|(idx, v)| (*idx, v.clone())).collect();
            entries.sort_by_key(|(idx, _)| *idx);
            entries
        }

        AnnotationReport {
            hoisting: sorted(&self.hoisting)
                .into_iter()
                .map(|(node, record)| HoistEntry {
                    node,
                    vars: record.vars,
                    funcs: record.funcs,
                })
                .collect(),
            scope_indexes: sorted(&self.scope_indexes)
                .into_iter()
                .map(|(node, index)| ScopeIndexEntry { node, index })
                .collect(),
            implicit_vars: sorted(&self.implicit_vars)
                .into_iter()
                .map(|(node, names)| ImplicitEntry { node, names })
                .collect(),
            rename_suffixes: sorted(&self.rename_suffixes)
                .into_iter()
                .map(|(node, suffix)| SuffixEntry { node, suffix })
                .collect(),
        }
    }
}

/// Serializable view of [`Annotations`], entries sorted by node index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationReport {
    pub hoisting: Vec<HoistEntry>,
    pub scope_indexes: Vec<ScopeIndexEntry>,
    pub implicit_vars: Vec<ImplicitEntry>,
    pub rename_suffixes: Vec<SuffixEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HoistEntry {
    pub node: NodeIndex,
    pub vars: NameSet,
    pub funcs: NameMap<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeIndexEntry {
    pub node: NodeIndex,
    #[serde(flatten)]
    pub index: ScopeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImplicitEntry {
    pub node: NodeIndex,
    pub names: NameSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuffixEntry {
    pub node: NodeIndex,
    pub suffix: String,
}
