//! codepage: Convert text to and from single-byte legacy code pages.
//!
//! This is the public API facade crate for codepage-rs. It re-exports types
//! from codepage-core and codepage-source and ties them together in a
//! [`Registry`], which builds each code page's tables on first use and
//! caches them for the registry's lifetime.
//!
//! # Architecture
//!
//! - **codepage-core**: Table parser, builder and data model
//! - **codepage-source**: Where table definitions are read from
//! - **codepage** (this crate): Registry and conversion operations
//!
//! # Example
//!
//! ```
//! use codepage::{Encoding, Registry};
//!
//! let registry = Registry::bundled();
//! let bytes = registry.encode("HELLO", "CP037").unwrap();
//! assert_eq!(bytes, [0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
//! assert_eq!(registry.decode(&bytes, "CP037").unwrap(), "HELLO");
//! ```

mod encoding;
mod options;
mod registry;

pub use codepage_core;
pub use codepage_core::{
    CodePageError, CodePageTables, DEFAULT_CODEPOINT, DecodeTable, EncodeMap, MappingEntry,
    ParseResult, TableWarning, TableWarningCode,
};
pub use codepage_source;
pub use codepage_source::{BundledSource, DirectorySource, MemorySource, SourceError, TableSource};
pub use encoding::Encoding;
pub use options::RegistryOptions;
pub use registry::Registry;
