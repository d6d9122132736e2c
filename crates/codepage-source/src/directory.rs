//! Tables read from a directory on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::source::TableSource;

/// A directory holding one `<name>.txt` file per code page.
///
/// Only regular files directly inside the directory are listed; the
/// directory is not walked recursively.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        // Keys are plain file names; anything that could leave the root is
        // treated as missing.
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return None;
        }
        Some(self.root.join(key))
    }
}

impl TableSource for DirectorySource {
    fn entries(&self) -> Result<Vec<String>, SourceError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(SourceError::Listing)? {
            let entry = entry.map_err(SourceError::Listing)?;
            if !entry.file_type().map_err(SourceError::Listing)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                keys.push(name.to_string());
            }
        }
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| SourceError::NotFound(key.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "reading table file");
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(key.to_string()),
            _ => SourceError::Unreadable {
                key: key.to_string(),
                source: e,
            },
        })
    }
}
