use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The template has no boilerplate sentinel, so there is no runtime
    /// section to assemble.
    #[error("Unable to find runtime: sentinel `{sentinel}` not present in template")]
    RuntimeNotFound { sentinel: String },

    #[error("failed to read support file {}: {source}", path.display())]
    SupportFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
