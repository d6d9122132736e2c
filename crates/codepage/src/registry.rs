//! Name → tables cache over a table source.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use codepage_core::{
    CodePageError, CodePageTables, ParseResult, TableWarning, build_tables, parse_table,
};
use codepage_source::{BundledSource, TableSource, table_key, table_name};

use crate::encoding::{Encoding, encode_with};
use crate::options::RegistryOptions;

/// A built table together with the warnings its source produced.
#[derive(Debug)]
struct CacheEntry {
    tables: Arc<CodePageTables>,
    warnings: Vec<TableWarning>,
}

/// Builds and caches [`CodePageTables`] by name.
///
/// Tables are built from the registry's [`TableSource`] the first time a name
/// is requested and kept for the registry's lifetime; the cache only grows.
/// Registries are independent of each other: there is no process-wide cache.
///
/// A registry can be shared between threads. Concurrent first requests for
/// the same name are serialized on a per-name build lock, so the source is
/// read once and every caller receives the same tables. Requests for names
/// already cached only take a shared read lock.
///
/// # Example
///
/// ```
/// use codepage::{Encoding, Registry};
///
/// let registry = Registry::bundled();
/// assert_eq!(registry.decode(&[0xF0, 0xF1, 0xF2], "CP037").unwrap(), "012");
/// assert_eq!(registry.encode_char('€', "CP1140").unwrap(), 0x9F);
/// ```
pub struct Registry {
    source: Box<dyn TableSource>,
    options: RegistryOptions,
    cache: RwLock<HashMap<String, CacheEntry>>,
    /// Names currently being built, each with its build lock.
    building: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Registry {
    /// Create a registry reading tables from `source`.
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self::with_options(source, RegistryOptions::default())
    }

    /// Create a registry with explicit options.
    pub fn with_options(source: impl TableSource + 'static, options: RegistryOptions) -> Self {
        Self {
            source: Box::new(source),
            options,
            cache: RwLock::new(HashMap::new()),
            building: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry over the tables bundled with the crate.
    pub fn bundled() -> Self {
        Self::new(BundledSource::new())
    }

    /// The options this registry was created with.
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Tables for `name`, building and caching them on first request.
    ///
    /// # Errors
    ///
    /// Returns [`CodePageError::TableNotFound`] if the source has no
    /// definition for `name` or cannot read it, and
    /// [`CodePageError::MalformedLine`] in strict mode if the definition has
    /// a bad line. Nothing is cached on error.
    pub fn tables_for(&self, name: &str) -> Result<Arc<CodePageTables>, CodePageError> {
        if let Some(tables) = self.cached(name) {
            return Ok(tables);
        }

        let gate = self.build_gate(name);
        let result = {
            let _guard = gate.lock().unwrap_or_else(PoisonError::into_inner);
            // Another caller may have finished the build while we waited.
            match self.cached(name) {
                Some(tables) => Ok(tables),
                None => self.build(name),
            }
        };
        self.release_gate(name, gate);
        result
    }

    /// Names of all code pages the source defines, in source order.
    ///
    /// Keys that are not table definitions are skipped. If the source cannot
    /// be enumerated the failure is logged and the list is empty.
    pub fn list_known(&self) -> Vec<String> {
        match self.source.entries() {
            Ok(keys) => keys
                .iter()
                .filter_map(|key| table_name(key))
                .map(str::to_string)
                .collect(),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "cannot list code page tables");
                Vec::new()
            }
        }
    }

    /// Whether tables for `name` have already been built.
    pub fn is_cached(&self, name: &str) -> bool {
        self.read_cache().contains_key(name)
    }

    /// Names with built tables, sorted.
    pub fn cached_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_cache().keys().cloned().collect();
        names.sort();
        names
    }

    /// Parser warnings recorded when `name` was built.
    ///
    /// Returns `None` if the tables have not been built. Returns an empty list
    /// when the table was clean or
    /// [`collect_warnings`](RegistryOptions::collect_warnings) is off.
    pub fn warnings_for(&self, name: &str) -> Option<Vec<TableWarning>> {
        self.read_cache().get(name).map(|e| e.warnings.clone())
    }

    /// Encode like [`Encoding::encode`], also returning one
    /// [`UnmappedCharacter`](codepage_core::TableWarningCode::UnmappedCharacter)
    /// warning per substituted character.
    pub fn encode_with_warnings(
        &self,
        text: &str,
        name: &str,
    ) -> Result<ParseResult<Vec<u8>>, CodePageError> {
        let tables = self.tables_for(name)?;
        let mut warnings = Vec::new();
        let bytes = encode_with(&tables, text, |c| {
            warnings.push(TableWarning::unmapped(c, tables.name()));
        });
        Ok(ParseResult::with_warnings(bytes, warnings))
    }

    fn cached(&self, name: &str) -> Option<Arc<CodePageTables>> {
        self.read_cache().get(name).map(|e| Arc::clone(&e.tables))
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn build_gate(&self, name: &str) -> Arc<Mutex<()>> {
        let mut building = self.building.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(building.entry(name.to_string()).or_default())
    }

    fn release_gate(&self, name: &str, gate: Arc<Mutex<()>>) {
        let mut building = self.building.lock().unwrap_or_else(PoisonError::into_inner);
        drop(gate);
        // The last caller out removes the gate; anyone still waiting holds a
        // clone and will find the tables in the cache.
        if building.get(name).is_some_and(|g| Arc::strong_count(g) == 1) {
            building.remove(name);
        }
    }

    fn build(&self, name: &str) -> Result<Arc<CodePageTables>, CodePageError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("build_table", table = name).entered();

        let raw = self.source.read(&table_key(name))?;
        let text = String::from_utf8_lossy(&raw);
        let parsed = parse_table(&text);
        let warnings: Vec<TableWarning> = parsed
            .warnings
            .into_iter()
            .map(|w| w.set_table(name))
            .collect();

        if self.options.strict_mode {
            if let Some(first) = warnings.first() {
                return Err(first.to_error());
            }
        }

        let tables = Arc::new(build_tables(name, &parsed.value));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = parsed.value.len(),
            defined = tables.decode_table().defined_count(),
            warnings = warnings.len(),
            "table built"
        );

        let entry = CacheEntry {
            tables: Arc::clone(&tables),
            warnings: if self.options.collect_warnings {
                warnings
            } else {
                Vec::new()
            },
        };
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), entry);
        Ok(tables)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::bundled()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("cached", &self.cached_names())
            .finish_non_exhaustive()
    }
}

impl Encoding for Registry {
    fn tables_for(&self, name: &str) -> Result<Arc<CodePageTables>, CodePageError> {
        Registry::tables_for(self, name)
    }

    fn list_known(&self) -> Vec<String> {
        Registry::list_known(self)
    }
}
