//! Runtime support bundle assembly.
//!
//! Generated PHP relies on a runtime made of support files. The list of files
//! is taken from a template: every `require_once('...')` directive above the
//! boilerplate sentinel names one support file. The bundle is the
//! concatenation of those files, prefixed with the timezone and encoding
//! setup the generated code expects.

pub mod error;
pub use error::RuntimeError;

pub mod loader;
pub use loader::{FsLoader, MemoryLoader, SupportLoader};

pub mod bundle;
pub use bundle::{DEFAULT_ENCODING, DEFAULT_SENTINEL, RuntimeOptions, build_runtime, local_timezone};
