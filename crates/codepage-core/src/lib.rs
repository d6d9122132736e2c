//! codepage-core: Backend-independent data model and table algorithms.
//!
//! This crate turns the textual definition of a single-byte code page into
//! the two lookup structures used for conversion: a dense 256-entry
//! [`DecodeTable`] (byte → char) and a sparse [`EncodeMap`] (char → byte).
//! It performs no I/O; table text is supplied by the caller.

pub mod builder;
pub mod error;
pub mod parser;
pub mod table;

pub use builder::build_tables;
pub use error::{CodePageError, ParseResult, TableWarning, TableWarningCode};
pub use parser::{LineOutcome, parse_line, parse_table};
pub use table::{CodePageTables, DEFAULT_CODEPOINT, DecodeTable, EncodeMap, MappingEntry};
