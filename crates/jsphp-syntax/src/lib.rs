//! Syntax tree representation for the jsphp transformer.
//!
//! Trees are produced by an external parser and handed over either through
//! the builder API on [`NodeArena`] or as a serialized arena. Nodes are
//! addressed by [`NodeIndex`]; annotations computed by later passes live in
//! side tables keyed by that index rather than on the nodes themselves.

pub mod node;
pub use node::{Node, NodeData, NodeIndex};

pub mod arena;
pub use arena::{Ancestors, NodeArena};
