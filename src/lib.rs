//! dirtree - render a directory subtree as a tree diagram

pub mod error;
pub mod output;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod tree;

pub use error::{Result, TreeError};
pub use output::{LineFormatter, resolve_separator, size_label};
pub use tree::{
    DirectoryEntry, EntryFilter, ExcludeSet, TreeConfig, TreeOutput, TreePrinter, WalkSummary,
    dir_tree, read_entries,
};
