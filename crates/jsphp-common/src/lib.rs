//! Common types and utilities shared by the jsphp crates.
//!
//! This crate provides:
//! - Insertion-ordered name collections (`NameSet`, `NameMap`)
//! - Traversal limits used by the tree walkers

// Name collections - Insertion-ordered sets/maps keyed by identifier text
pub mod names;
pub use names::{NameMap, NameSet};

// Centralized limits and thresholds
pub mod limits;
