//! Directory tree walking logic
//!
//! The walk is a single depth-first pass: each directory is listed, filtered,
//! and its kept entries are handed to a `TreeOutput` in listing order before
//! descending into subdirectories.

mod config;
mod entry;
mod filter;
mod walker;

pub use config::{DEFAULT_EXCLUDED, ExcludeSet, TreeConfig};
pub use entry::{DirectoryEntry, read_entries};
pub use filter::EntryFilter;
pub use walker::{TreeOutput, TreePrinter, WalkSummary, dir_tree};
