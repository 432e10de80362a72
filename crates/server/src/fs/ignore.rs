//! Name-based filtering of platform housekeeping artifacts.

/// Artifact names excluded from listings and counts by default.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[".DS_Store", ".Trash", ".localized"];

/// Exact-name filter for filesystem entries.
///
/// The name set is fixed configuration data, not derived from the
/// filesystem. Matching is exact string equality only; there is no
/// wildcard or path-prefix matching.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    names: Vec<String>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()))
    }
}

impl IgnoreFilter {
    /// Create a filter over a custom name set.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Returns true iff `name` exactly matches a configured artifact name.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
