//! Entry filtering for tree printing

use super::config::TreeConfig;
use super::entry::DirectoryEntry;

/// Decides which entries of a listing are rendered.
pub struct EntryFilter<'a> {
    config: &'a TreeConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self { config }
    }

    /// Check if a single entry is kept. Excluded names lose even when files are shown.
    pub fn is_included(&self, entry: &DirectoryEntry) -> bool {
        if self.config.excluded.contains(entry.name()) {
            return false;
        }
        if !self.config.include_files && !entry.is_dir() {
            return false;
        }
        true
    }

    /// Keep the included entries, in listing order.
    pub fn apply(&self, entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
        entries
            .into_iter()
            .filter(|entry| self.is_included(entry))
            .collect()
    }
}
