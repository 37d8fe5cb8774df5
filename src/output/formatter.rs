//! Line formatter
//!
//! `LineFormatter` writes one line per entry handed to it by the `TreePrinter`,
//! straight to any `Write` sink without buffering the tree.

use std::io::{self, Write};

use crate::tree::{DirectoryEntry, TreeOutput};

use super::glyphs::{CONNECTOR, size_label};

/// Writes `<prefix>───<name>` lines, with a size label for files.
pub struct LineFormatter<W: Write> {
    out: W,
}

impl<W: Write> LineFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for LineFormatter<W> {
    fn output_entry(&mut self, entry: &DirectoryEntry, prefix: &str) -> io::Result<()> {
        if entry.is_dir() {
            writeln!(self.out, "{}{}{}", prefix, CONNECTOR, entry.name())
        } else {
            writeln!(
                self.out,
                "{}{}{} {}",
                prefix,
                CONNECTOR,
                entry.name(),
                size_label(entry)
            )
        }
    }
}
