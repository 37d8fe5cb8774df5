//! Branch glyphs, line prefixes and size labels

use crate::tree::DirectoryEntry;

/// Branch glyph for an entry with siblings after it.
pub const BRANCH: &str = "├";
/// Branch glyph for the last entry at its level.
pub const LAST_BRANCH: &str = "└";
/// Connector run between the branch glyph and the entry name.
pub const CONNECTOR: &str = "───";
/// Continuation column under an ancestor that still has siblings below it.
pub const CONTINUATION: &str = "│\t";
/// Continuation column under an ancestor that was the last sibling.
pub const BLANK: &str = "\t";

/// Compute the line prefix for an entry at `depth`.
///
/// `ancestor_last` holds one flag per enclosing level, outermost first, telling
/// whether that ancestor was the last of its siblings. The entry's own finality
/// only picks the branch glyph.
pub fn resolve_separator(depth: usize, is_last: bool, ancestor_last: &[bool]) -> String {
    debug_assert_eq!(ancestor_last.len(), depth);

    let mut prefix = String::with_capacity(depth * CONTINUATION.len() + LAST_BRANCH.len());
    for &last in ancestor_last.iter().take(depth) {
        prefix.push_str(if last { BLANK } else { CONTINUATION });
    }
    prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    prefix
}

/// Size annotation for a file entry: `(empty)` or `(<N>b)`.
pub fn size_label(entry: &DirectoryEntry) -> String {
    match entry.size() {
        0 => "(empty)".to_string(),
        n => format!("({}b)", n),
    }
}
