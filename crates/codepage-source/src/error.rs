//! Error types for table sources.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides a conversion
//! from [`SourceError`] to [`CodePageError`] so callers see a single error type.

use codepage_core::CodePageError;
use thiserror::Error;

use crate::source::table_name;

/// Error type for table source operations.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no entry under this key.
    #[error("no table entry {0}")]
    NotFound(String),

    /// The entry exists but could not be read.
    #[error("cannot read table entry {key}: {source}")]
    Unreadable {
        /// Key that was requested.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source's entries could not be enumerated.
    #[error("cannot list table entries: {0}")]
    Listing(#[source] std::io::Error),
}

impl SourceError {
    /// Key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            SourceError::NotFound(key) | SourceError::Unreadable { key, .. } => Some(key),
            SourceError::Listing(_) => None,
        }
    }
}

impl From<SourceError> for CodePageError {
    fn from(err: SourceError) -> Self {
        let reason = err.to_string();
        match err.key() {
            Some(key) => {
                CodePageError::table_not_found(table_name(key).unwrap_or(key), reason)
            }
            None => CodePageError::Other(reason),
        }
    }
}
