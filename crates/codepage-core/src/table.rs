//! Lookup structures for a single-byte code page.
//!
//! A code page is held as two inverse structures built from the same list of
//! [`MappingEntry`] values: a dense [`DecodeTable`] indexed by byte, and a
//! sparse [`EncodeMap`] keyed by character. Both are immutable once built and
//! are bundled together with the code page name in [`CodePageTables`].

use std::collections::HashMap;
use std::collections::hash_map;

/// Character produced when decoding a byte the table never defined.
pub const DEFAULT_CODEPOINT: char = '\u{0000}';

/// One `(byte, codepoint)` pair taken from a table definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingEntry {
    /// Byte value in the legacy encoding.
    pub byte: u8,
    /// Unicode scalar value the byte stands for.
    pub codepoint: char,
}

impl MappingEntry {
    /// Create a mapping entry.
    pub fn new(byte: u8, codepoint: char) -> Self {
        Self { byte, codepoint }
    }
}

/// Byte → character table with exactly 256 slots.
///
/// Slots that no entry defined decode to [`DEFAULT_CODEPOINT`]; use
/// [`is_defined`](DecodeTable::is_defined) to tell them apart from an
/// explicit mapping to U+0000.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Option<char>>", try_from = "Vec<Option<char>>")
)]
pub struct DecodeTable {
    slots: [Option<char>; 256],
}

impl DecodeTable {
    /// Create a table with every slot undefined.
    pub fn new() -> Self {
        Self { slots: [None; 256] }
    }

    /// Set the character for `byte`, returning the previous definition.
    pub(crate) fn set(&mut self, byte: u8, codepoint: char) -> Option<char> {
        self.slots[byte as usize].replace(codepoint)
    }

    /// Character for `byte`, or [`DEFAULT_CODEPOINT`] if undefined.
    pub fn get(&self, byte: u8) -> char {
        self.slots[byte as usize].unwrap_or(DEFAULT_CODEPOINT)
    }

    /// Whether some table entry defined `byte`.
    pub fn is_defined(&self, byte: u8) -> bool {
        self.slots[byte as usize].is_some()
    }

    /// Number of defined slots.
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate over all 256 slots as `(byte, char)`, undefined slots yielding
    /// [`DEFAULT_CODEPOINT`].
    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u8, s.unwrap_or(DEFAULT_CODEPOINT)))
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DecodeTable> for Vec<Option<char>> {
    fn from(table: DecodeTable) -> Self {
        table.slots.to_vec()
    }
}

impl TryFrom<Vec<Option<char>>> for DecodeTable {
    type Error = String;

    fn try_from(slots: Vec<Option<char>>) -> Result<Self, Self::Error> {
        let len = slots.len();
        let slots: [Option<char>; 256] = slots
            .try_into()
            .map_err(|_| format!("decode table needs 256 slots, got {len}"))?;
        Ok(Self { slots })
    }
}

/// Character → byte map. Only holds characters the table defines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeMap {
    map: HashMap<char, u8>,
}

impl EncodeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `codepoint` to `byte`, returning the byte it previously mapped to.
    pub(crate) fn insert(&mut self, codepoint: char, byte: u8) -> Option<u8> {
        self.map.insert(codepoint, byte)
    }

    /// Byte for `codepoint`, if the table defines one.
    pub fn get(&self, codepoint: char) -> Option<u8> {
        self.map.get(&codepoint).copied()
    }

    /// Whether the table defines `codepoint`.
    pub fn contains(&self, codepoint: char) -> bool {
        self.map.contains_key(&codepoint)
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no character is mapped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(char, byte)` pairs in arbitrary order.
    pub fn iter(&self) -> EncodeMapIter<'_> {
        EncodeMapIter {
            inner: self.map.iter(),
        }
    }
}

/// Iterator returned by [`EncodeMap::iter`].
pub struct EncodeMapIter<'a> {
    inner: hash_map::Iter<'a, char, u8>,
}

impl Iterator for EncodeMapIter<'_> {
    type Item = (char, u8);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&c, &b)| (c, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for EncodeMapIter<'_> {}

/// The built tables for one named code page.
///
/// Produced once per name by [`build_tables`](crate::build_tables) and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodePageTables {
    name: String,
    decode: DecodeTable,
    encode: EncodeMap,
}

impl CodePageTables {
    /// Assemble tables from already-built parts.
    pub fn from_parts(name: impl Into<String>, decode: DecodeTable, encode: EncodeMap) -> Self {
        Self {
            name: name.into(),
            decode,
            encode,
        }
    }

    /// Code page name the tables were built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The byte → char table.
    pub fn decode_table(&self) -> &DecodeTable {
        &self.decode
    }

    /// The char → byte map.
    pub fn encode_map(&self) -> &EncodeMap {
        &self.encode
    }

    /// Decode a single byte.
    pub fn decode_byte(&self, byte: u8) -> char {
        self.decode.get(byte)
    }

    /// Encode a single character, without any substitution.
    pub fn encode_char(&self, codepoint: char) -> Option<u8> {
        self.encode.get(codepoint)
    }

    /// Byte the table maps U+0020 SPACE to, if any.
    pub fn space_byte(&self) -> Option<u8> {
        self.encode.get(' ')
    }

    /// Defined `(byte, char)` pairs in byte order.
    pub fn defined_entries(&self) -> Vec<MappingEntry> {
        (0..=255u8)
            .filter(|&b| self.decode.is_defined(b))
            .map(|b| MappingEntry::new(b, self.decode.get(b)))
            .collect()
    }
}
