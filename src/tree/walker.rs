//! TreePrinter - depth-first walk that streams one line per kept entry

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TreeError};
use crate::output::{LineFormatter, resolve_separator};

use super::config::TreeConfig;
use super::entry::{DirectoryEntry, read_entries};
use super::filter::EntryFilter;

/// Callback for streaming output - receives each kept entry with its line prefix.
pub trait TreeOutput {
    fn output_entry(&mut self, entry: &DirectoryEntry, prefix: &str) -> io::Result<()>;
}

/// Number of rendered lines, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

/// Tree printer that renders entries as it reads them.
/// Memory use is O(depth): only the ancestor flags of the current path are held.
pub struct TreePrinter {
    config: TreeConfig,
}

impl TreePrinter {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every kept entry below it to `output`.
    ///
    /// The first read or write failure aborts the walk. Lines already handed
    /// to `output` stay there.
    pub fn print_tree<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        self.print_dir(root, 0, &[], output, &mut summary)?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            "walk finished"
        );
        Ok(summary)
    }

    fn print_dir<O: TreeOutput>(
        &self,
        path: &Path,
        depth: usize,
        ancestor_last: &[bool],
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let entries = EntryFilter::new(&self.config).apply(read_entries(path)?);
        debug!(path = %path.display(), depth, kept = entries.len(), "listing directory");

        let count = entries.len();
        for (idx, entry) in entries.iter().enumerate() {
            let is_last = idx + 1 == count;
            let prefix = resolve_separator(depth, is_last, ancestor_last);

            output
                .output_entry(entry, &prefix)
                .map_err(TreeError::Write)?;

            if entry.is_dir() {
                summary.directories += 1;
                let mut child_last = Vec::with_capacity(depth + 1);
                child_last.extend_from_slice(ancestor_last);
                child_last.push(is_last);
                self.print_dir(
                    &path.join(entry.file_name()),
                    depth + 1,
                    &child_last,
                    output,
                    summary,
                )?;
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}

/// Render the tree under `path` to `out` using the default exclusions.
pub fn dir_tree<W: Write>(out: W, path: &Path, include_files: bool) -> Result<WalkSummary> {
    let printer = TreePrinter::new(TreeConfig::default().with_files(include_files));
    let mut formatter = LineFormatter::new(out);
    let summary = printer.print_tree(path, &mut formatter)?;
    formatter.flush().map_err(TreeError::Write)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::config::ExcludeSet;

    fn render(tree: &TestTree, config: TreeConfig) -> String {
        let mut formatter = LineFormatter::new(Vec::new());
        TreePrinter::new(config)
            .print_tree(tree.path(), &mut formatter)
            .unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    /// Output sink that fails after a fixed number of lines.
    struct FailingOutput {
        remaining: usize,
        lines: usize,
    }

    impl TreeOutput for FailingOutput {
        fn output_entry(&mut self, _entry: &DirectoryEntry, _prefix: &str) -> io::Result<()> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= 1;
            self.lines += 1;
            Ok(())
        }
    }

    #[test]
    fn test_dirs_only_skips_files() {
        let tree = TestTree::new();
        tree.add_dir("a");
        tree.add_file("b.txt", "");

        assert_eq!(render(&tree, TreeConfig::default()), "└───a\n");
    }

    #[test]
    fn test_files_with_sizes() {
        let tree = TestTree::new();
        tree.add_dir("a");
        tree.add_file("b.txt", "");

        assert_eq!(
            render(&tree, TreeConfig::default().with_files(true)),
            "├───a\n└───b.txt (empty)\n"
        );
    }

    #[test]
    fn test_nested_continuation_columns() {
        let tree = TestTree::new();
        tree.add_dir("a/x/deep");
        tree.add_dir("b/y");

        assert_eq!(
            render(&tree, TreeConfig::default()),
            "├───a\n│\t└───x\n│\t\t└───deep\n└───b\n\t└───y\n"
        );
    }

    #[test]
    fn test_nested_files() {
        let tree = TestTree::new();
        tree.add_file("project/file.txt", "hello");
        tree.add_file("project/gopher.png", "");
        tree.add_file("static/css/body.css", "body {}");
        tree.add_file("zline", "");

        assert_eq!(
            render(&tree, TreeConfig::default().with_files(true)),
            "├───project\n\
             │\t├───file.txt (5b)\n\
             │\t└───gopher.png (empty)\n\
             ├───static\n\
             │\t└───css\n\
             │\t\t└───body.css (7b)\n\
             └───zline (empty)\n"
        );
    }

    #[test]
    fn test_default_exclusions() {
        let tree = TestTree::new();
        tree.add_dir(".idea");
        tree.add_file(".DS_Store", "junk");
        tree.add_dir("src");

        assert_eq!(
            render(&tree, TreeConfig::default().with_files(true)),
            "└───src\n"
        );
    }

    #[test]
    fn test_overridden_exclusions() {
        let tree = TestTree::new();
        tree.add_dir(".idea");
        tree.add_dir("target");

        let config = TreeConfig::default().with_excluded(ExcludeSet::new(["target"]));
        assert_eq!(render(&tree, config), "└───.idea\n");
    }

    #[test]
    fn test_summary_counts() {
        let tree = TestTree::new();
        tree.add_file("a/one.txt", "1");
        tree.add_file("a/b/two.txt", "22");
        tree.add_file("three.txt", "");

        let printer = TreePrinter::new(TreeConfig::default().with_files(true));
        let mut formatter = LineFormatter::new(Vec::new());
        let summary = printer.print_tree(tree.path(), &mut formatter).unwrap();
        assert_eq!(
            summary,
            WalkSummary {
                directories: 2,
                files: 3
            }
        );

        let printer = TreePrinter::new(TreeConfig::default());
        let mut formatter = LineFormatter::new(Vec::new());
        let summary = printer.print_tree(tree.path(), &mut formatter).unwrap();
        assert_eq!(summary.files, 0);
        assert_eq!(summary.directories, 2);
    }

    #[test]
    fn test_empty_root() {
        let tree = TestTree::new();
        assert_eq!(render(&tree, TreeConfig::default().with_files(true)), "");
    }

    #[test]
    fn test_missing_root_is_read_error() {
        let tree = TestTree::new();
        let printer = TreePrinter::new(TreeConfig::default());
        let mut formatter = LineFormatter::new(Vec::new());
        let err = printer
            .print_tree(&tree.path().join("missing"), &mut formatter)
            .unwrap_err();
        assert!(matches!(err, TreeError::Read { .. }));
        assert!(formatter.into_inner().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_nested_read_failure_aborts_walk() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        tree.add_dir("a");
        let locked = tree.add_dir("b/locked");
        tree.add_dir("c");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root can list anything; there is nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut formatter = LineFormatter::new(Vec::new());
        let result =
            TreePrinter::new(TreeConfig::default()).print_tree(tree.path(), &mut formatter);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(TreeError::Read { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected read error, got {:?}", other),
        }
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "├───a\n├───b\n│\t└───locked\n");
        assert!(!output.contains("───c\n"));
    }

    #[test]
    fn test_write_failure_aborts_walk() {
        let tree = TestTree::new();
        tree.add_dir("a/b/c");
        tree.add_dir("d");

        let mut output = FailingOutput {
            remaining: 2,
            lines: 0,
        };
        let err = TreePrinter::new(TreeConfig::default())
            .print_tree(tree.path(), &mut output)
            .unwrap_err();
        assert!(matches!(err, TreeError::Write(_)));
        assert_eq!(output.lines, 2);
    }

    #[test]
    fn test_dir_tree_is_idempotent() {
        let tree = TestTree::new();
        tree.add_file("a/b/c.txt", "abc");
        tree.add_file("a/d.txt", "");
        tree.add_dir("e");

        let mut first = Vec::new();
        let mut second = Vec::new();
        dir_tree(&mut first, tree.path(), true).unwrap();
        dir_tree(&mut second, tree.path(), true).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
