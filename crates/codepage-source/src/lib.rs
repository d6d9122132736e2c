//! codepage-source: Where code page table definitions come from.
//!
//! Defines the read-only [`TableSource`] abstraction (key → bytes) and three
//! implementations: [`BundledSource`] for the tables shipped with the crate,
//! [`DirectorySource`] for `<name>.txt` files on disk, and [`MemorySource`]
//! for tables held in memory.

pub mod bundled;
pub mod directory;
pub mod error;
pub mod memory;
pub mod source;

pub use bundled::BundledSource;
pub use codepage_core;
pub use directory::DirectorySource;
pub use error::SourceError;
pub use memory::MemorySource;
pub use source::{TABLE_EXTENSION, TableSource, table_key, table_name};
