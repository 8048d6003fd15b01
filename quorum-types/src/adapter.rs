//! Adapter metadata types usable across crates.

/// Typed key for identifying source adapters in configuration and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterKey(pub &'static str);

impl AdapterKey {
    /// Construct a new typed adapter key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<AdapterKey> for &'static str {
    fn from(k: AdapterKey) -> Self {
        k.0
    }
}
