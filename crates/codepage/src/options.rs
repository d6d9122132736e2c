//! Registry configuration.

/// Options controlling how a [`Registry`](crate::Registry) builds tables.
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// Whether to keep parser warnings for each built table (default: true).
    ///
    /// Kept warnings are available from
    /// [`Registry::warnings_for`](crate::Registry::warnings_for).
    pub collect_warnings: bool,
    /// When true, any parser warning fails the build (default: false).
    ///
    /// The failed table is not cached, so a later request reads the source
    /// again.
    pub strict_mode: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            collect_warnings: true,
            strict_mode: false,
        }
    }
}

impl RegistryOptions {
    /// Options that reject any table with a malformed line.
    pub fn strict() -> Self {
        Self {
            strict_mode: true,
            ..Self::default()
        }
    }
}
