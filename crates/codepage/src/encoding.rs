//! The conversion capability shared by everything that can resolve tables.

use std::sync::Arc;

use codepage_core::{CodePageError, CodePageTables};

/// Conversion between Unicode text and named single-byte code pages.
///
/// Implementors only supply table resolution and listing; the conversions
/// are provided on top of [`tables_for`](Encoding::tables_for). Every
/// conversion resolves its tables first, so an unknown name fails with
/// [`CodePageError::TableNotFound`] before any input is looked at.
pub trait Encoding {
    /// Tables for code page `name`, building them if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CodePageError::TableNotFound`] if no definition for `name`
    /// exists or it cannot be read.
    fn tables_for(&self, name: &str) -> Result<Arc<CodePageTables>, CodePageError>;

    /// Names of all code pages that can be requested, in source order.
    fn list_known(&self) -> Vec<String>;

    /// Decode `bytes` from code page `name`.
    ///
    /// Never fails on content: a byte the table does not define decodes to
    /// [`DEFAULT_CODEPOINT`](codepage_core::DEFAULT_CODEPOINT).
    fn decode(&self, bytes: &[u8], name: &str) -> Result<String, CodePageError> {
        let tables = self.tables_for(name)?;
        Ok(decode_with(&tables, bytes))
    }

    /// Encode `text` into code page `name`.
    ///
    /// Characters without a mapping are replaced by the byte the table maps
    /// U+0020 SPACE to (0x00 if it has none) and logged as a warning.
    fn encode(&self, text: &str, name: &str) -> Result<Vec<u8>, CodePageError> {
        let tables = self.tables_for(name)?;
        Ok(encode_with(&tables, text, |_| {}))
    }

    /// Encode a single character into code page `name`, without substitution.
    ///
    /// # Errors
    ///
    /// Returns [`CodePageError::NoMappingForRune`] if the table has no byte
    /// for `codepoint`.
    fn encode_char(&self, codepoint: char, name: &str) -> Result<u8, CodePageError> {
        let tables = self.tables_for(name)?;
        tables
            .encode_char(codepoint)
            .ok_or_else(|| CodePageError::NoMappingForRune {
                codepoint,
                name: name.to_string(),
            })
    }
}

pub(crate) fn decode_with(tables: &CodePageTables, bytes: &[u8]) -> String {
    bytes.iter().map(|&b| tables.decode_byte(b)).collect()
}

/// Encode with space substitution, calling `on_unmapped` for each
/// substituted character.
pub(crate) fn encode_with(
    tables: &CodePageTables,
    text: &str,
    mut on_unmapped: impl FnMut(char),
) -> Vec<u8> {
    let fallback = tables.space_byte().unwrap_or(0x00);
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let byte = match tables.encode_char(c) {
            Some(b) => b,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    table = tables.name(),
                    codepoint = %c.escape_unicode(),
                    substitute = fallback,
                    "no mapping for character, substituted the space byte"
                );
                on_unmapped(c);
                fallback
            }
        };
        out.push(byte);
    }
    out
}
