//! Tables compiled into the crate.

use crate::error::SourceError;
use crate::source::TableSource;

macro_rules! bundled_tables {
    ($($file:literal),* $(,)?) => {
        &[$(($file, include_str!(concat!("../tables/", $file)))),*]
    };
}

/// `(key, definition)` pairs for every shipped table.
static BUNDLED: &[(&str, &str)] = bundled_tables![
    "CP037.txt",
    "CP273.txt",
    "CP284.txt",
    "CP500.txt",
    "CP1047.txt",
    "CP1140.txt",
    "CP1145.txt",
    "CP437.txt",
    "CP850.txt",
    "CP1252.txt",
    "ISO8859-1.txt",
    "ISO8859-15.txt",
];

/// The table definitions shipped with this crate.
///
/// Covers the EBCDIC code pages CP037, CP273, CP284, CP500, CP1047, CP1140
/// and CP1145 and the extended-ASCII code pages CP437, CP850, CP1252,
/// ISO8859-1 and ISO8859-15.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    /// Create the bundled source.
    pub fn new() -> Self {
        Self
    }

    /// Definition text stored under `key`, without copying.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

impl TableSource for BundledSource {
    fn entries(&self) -> Result<Vec<String>, SourceError> {
        Ok(BUNDLED.iter().map(|(k, _)| (*k).to_string()).collect())
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(key, "reading bundled table");
        self.get(key)
            .map(|text| text.as_bytes().to_vec())
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
