//! Output formatting for tree display
//!
//! - `glyphs`: branch glyphs, continuation columns and size labels
//! - `formatter`: `LineFormatter`, the `TreeOutput` that writes lines to a sink

mod formatter;
pub mod glyphs;

pub use formatter::LineFormatter;
pub use glyphs::{resolve_separator, size_label};
