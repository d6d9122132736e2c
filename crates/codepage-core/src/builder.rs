//! Table builder: mapping entries → [`CodePageTables`].

use crate::table::{CodePageTables, DecodeTable, EncodeMap, MappingEntry};

/// Build the decode table and encode map for `name` from `entries`.
///
/// Entries are applied in order. A later entry for a byte or codepoint that
/// is already defined replaces the earlier definition on that side only, so
/// the last definition wins. The builder does not check that the two
/// structures are inverses of each other.
pub fn build_tables(name: &str, entries: &[MappingEntry]) -> CodePageTables {
    let mut decode = DecodeTable::new();
    let mut encode = EncodeMap::new();

    for entry in entries {
        let previous_char = decode.set(entry.byte, entry.codepoint);
        let previous_byte = encode.insert(entry.codepoint, entry.byte);

        #[cfg(feature = "tracing")]
        {
            if let Some(old) = previous_char.filter(|&c| c != entry.codepoint) {
                tracing::debug!(
                    table = name,
                    byte = entry.byte,
                    old = %old.escape_unicode(),
                    new = %entry.codepoint.escape_unicode(),
                    "byte redefined"
                );
            }
            if let Some(old) = previous_byte.filter(|&b| b != entry.byte) {
                tracing::debug!(
                    table = name,
                    codepoint = %entry.codepoint.escape_unicode(),
                    old,
                    new = entry.byte,
                    "codepoint remapped"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = (previous_char, previous_byte);
    }

    CodePageTables::from_parts(name, decode, encode)
}
