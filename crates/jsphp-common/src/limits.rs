//! Centralized limits for tree walks.
//!
//! The input tree comes from external tools and is not validated. A malformed
//! parent link could form a cycle, so upward walks are bounded by these
//! constants; downward walks skip nodes they have already visited.

/// Maximum number of parent hops when walking up the syntax tree.
///
/// Used by `NodeArena::ancestors` and the hoisting-target lookup. Real
/// programs nest a few hundred levels at most.
pub const MAX_ANCESTOR_WALK: usize = 10_000;
