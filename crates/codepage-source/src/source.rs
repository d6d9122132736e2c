//! The table source trait and its naming convention.
//!
//! A table source is a read-only store of raw table definitions addressed by
//! key. The definition of code page `NAME` lives under the key `NAME.txt`;
//! any other key is not a table definition and is ignored when listing.

use crate::error::SourceError;

/// Extension that marks a key as a table definition.
pub const TABLE_EXTENSION: &str = ".txt";

/// Trait abstracting where table definitions are read from.
///
/// Implementations must be shareable across threads: a registry built on a
/// source may be used from several threads at once.
///
/// # Usage
///
/// ```ignore
/// let source = DirectorySource::new("/usr/share/codepages");
/// let raw = source.read(&table_key("CP037"))?;
/// ```
pub trait TableSource: Send + Sync {
    /// Enumerate the keys in the source, in the source's own order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Listing`] if the source cannot be enumerated.
    fn entries(&self) -> Result<Vec<String>, SourceError>;

    /// Read the raw bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] if there is no such key, or
    /// [`SourceError::Unreadable`] if it exists but cannot be read.
    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError>;
}

impl<S: TableSource + ?Sized> TableSource for Box<S> {
    fn entries(&self) -> Result<Vec<String>, SourceError> {
        (**self).entries()
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        (**self).read(key)
    }
}

impl<S: TableSource + ?Sized> TableSource for std::sync::Arc<S> {
    fn entries(&self) -> Result<Vec<String>, SourceError> {
        (**self).entries()
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        (**self).read(key)
    }
}

/// Key under which the definition of code page `name` is stored.
pub fn table_key(name: &str) -> String {
    format!("{name}{TABLE_EXTENSION}")
}

/// Code page name for a source key, or `None` if the key is not a table
/// definition.
pub fn table_name(key: &str) -> Option<&str> {
    key.strip_suffix(TABLE_EXTENSION)
        .filter(|name| !name.is_empty())
}
