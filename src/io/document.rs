//! Document source: reads the full text of a document from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{KeyrankError, KeyrankResult};

/// A plain-text document on disk.
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole document as UTF-8 text.
    pub fn read_all(&self) -> KeyrankResult<String> {
        fs::read_to_string(&self.path).map_err(|source| KeyrankError::Io {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
