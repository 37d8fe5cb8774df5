//! Directory entries as read from the filesystem

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};

/// A single node returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: String,
    file_name: OsString,
    is_dir: bool,
    size: u64,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, is_dir: bool, size: u64) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            is_dir,
            size,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, true, 0)
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, false, size)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw name as listed, used to build child paths.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Size in bytes. Always 0 for directories.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Read the listing of `path`, sorted by name.
///
/// Symlinks are not followed: a link is reported with its own type and size,
/// so a link to a directory is listed as a non-directory.
pub fn read_entries(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let listing = fs::read_dir(path).map_err(|e| TreeError::read(path, e))?;

    let mut raw = listing
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| TreeError::read(path, e))?;
    raw.sort_by_key(|a| a.file_name());

    raw.into_iter()
        .map(|entry| {
            let file_type = entry
                .file_type()
                .map_err(|e| TreeError::read(entry.path(), e))?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().into_owned();

            let (is_dir, size) = if file_type.is_dir() {
                (true, 0)
            } else {
                let meta = entry
                    .metadata()
                    .map_err(|e| TreeError::read(entry.path(), e))?;
                (false, meta.len())
            };
            Ok(DirectoryEntry {
                name,
                file_name,
                is_dir,
                size,
            })
        })
        .collect()
}
