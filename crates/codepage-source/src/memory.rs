//! Tables held in memory.

use std::collections::BTreeMap;

use crate::error::SourceError;
use crate::source::{TableSource, table_key};

/// An in-memory key → bytes table source.
///
/// Entries are listed in key order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), data.into());
    }

    /// Store the definition of code page `name` under its table key.
    pub fn insert_table(&mut self, name: &str, definition: impl Into<Vec<u8>>) {
        self.insert(table_key(name), definition);
    }

    /// Builder form of [`insert_table`](MemorySource::insert_table).
    pub fn with_table(mut self, name: &str, definition: impl Into<Vec<u8>>) -> Self {
        self.insert_table(name, definition);
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TableSource for MemorySource {
    fn entries(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
