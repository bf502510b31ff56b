//! Where the `run` builtin gets script text from.

use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("No such script: {path}")]
    NotFound { path: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Io { path, .. } | LoadError::NotFound { path } => path,
        }
    }
}

/// Host collaborator that turns a script path into its text.
pub trait ScriptLoader {
    fn load(&self, path: &str) -> Result<String, LoadError>;
}

/// Reads scripts from the file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl ScriptLoader for FsLoader {
    fn load(&self, path: &str) -> Result<String, LoadError> {
        std::fs::read_to_string(Path::new(path)).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }
}

/// Serves scripts from memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    scripts: FxHashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_script(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.scripts.insert(path.into(), text.into());
    }
}

impl ScriptLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<String, LoadError> {
        self.scripts
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_string(),
            })
    }
}
