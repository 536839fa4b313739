//! Insertion-ordered name collections.
//!
//! Scope indexes and hoisting records are compared in tests and serialized
//! for the code generator, so iteration order must follow the order in which
//! names were first seen. `IndexSet`/`IndexMap` give that ordering while the
//! Fx hasher keeps lookups cheap for short identifier strings.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// A set of identifier names in first-seen order.
pub type NameSet = IndexSet<String, FxBuildHasher>;

/// A map from identifier names to `V` in first-inserted order.
pub type NameMap<V> = IndexMap<String, V, FxBuildHasher>;

/// Build a `NameSet` from anything yielding string slices.
///
/// Mostly useful in tests and when comparing scope indexes.
pub fn name_set<'a, I>(names: I) -> NameSet
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(str::to_string).collect()
}
