//! Configuration types for the tree printer

use std::collections::BTreeSet;

/// Names that are dropped unless overridden.
pub const DEFAULT_EXCLUDED: [&str; 2] = [".idea", ".DS_Store"];

/// Set of exact entry names that never appear in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet(BTreeSet<String>);

impl ExcludeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// An exclusion set that drops nothing.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED)
    }
}

/// Configuration for tree printing behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Show files (with size labels) alongside directories
    pub include_files: bool,
    pub excluded: ExcludeSet,
}

impl TreeConfig {
    pub fn with_files(mut self, include_files: bool) -> Self {
        self.include_files = include_files;
        self
    }

    pub fn with_excluded(mut self, excluded: ExcludeSet) -> Self {
        self.excluded = excluded;
        self
    }
}
