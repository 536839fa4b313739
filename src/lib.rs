//! jsphp: scope annotation stage of a JavaScript-to-PHP transformer.
//!
//! The crates behind this facade:
//! - [`syntax`]: the syntax tree arena handed over by the parser
//! - [`scope`]: the scope graph and the annotation passes
//! - [`runtime`]: runtime support bundle assembly
//!
//! [`Transformer`] drives the passes in the order the scope graph builder
//! needs: hoisting first, then the external resolver, then indexing.

pub use jsphp_common as common;
pub use jsphp_runtime as runtime;
pub use jsphp_scope as scope;
pub use jsphp_syntax as syntax;

// Pipeline driver
pub mod transformer;
pub use transformer::{ProgramInput, ScopeResolver, Transformer};

// Tracing subscriber setup for binaries
pub mod tracing_config;
