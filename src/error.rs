//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("usage: {program} <path> [-f]")]
    Usage { program: String },

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

impl TreeError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Read {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message() {
        let err = TreeError::Usage {
            program: "dirtree".to_string(),
        };
        assert_eq!(err.to_string(), "usage: dirtree <path> [-f]");
    }

    #[test]
    fn test_read_error_names_path() {
        let err = TreeError::read(
            "missing/dir",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing/dir"), "message was: {}", msg);
        assert!(msg.contains("not found"), "message was: {}", msg);
    }
}
