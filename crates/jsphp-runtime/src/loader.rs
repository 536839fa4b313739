//! Support file sources.

use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::RuntimeError;

/// Where `require_once` paths are read from.
pub trait SupportLoader {
    fn load(&self, path: &str) -> Result<String, RuntimeError>;
}

/// Reads support files relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsLoader { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SupportLoader for FsLoader {
    fn load(&self, path: &str) -> Result<String, RuntimeError> {
        let full = self.root.join(path);
        trace!(path = %full.display(), "reading support file");
        std::fs::read_to_string(&full).map_err(|source| RuntimeError::SupportFile { path: full, source })
    }
}

/// In-memory support files, keyed by the path used in the template.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        MemoryLoader::default()
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: &str, contents: &str) {
        self.files.insert(path.to_string(), contents.to_string());
    }
}

impl SupportLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<String, RuntimeError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::SupportFile {
                path: PathBuf::from(path),
                source: io::Error::new(io::ErrorKind::NotFound, "no such support file"),
            })
    }
}
