//! Error types for textkit operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for all core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid argument or input, raised before any file is touched
    #[error("validation error: {0}")]
    Validation(String),

    /// A word vector did not have the declared dimension
    #[error("vector for '{term}' has {found} components, expected {expected}")]
    DimensionMismatch {
        /// Term whose vector was rejected
        term: String,
        /// Declared dimension
        expected: usize,
        /// Number of components actually present
        found: usize,
    },

    /// A line could not be parsed
    #[error("parse error in {} at line {line}: {reason}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Invalid UTF-8 encountered in strict mode
    #[error("invalid UTF-8 in {} at line {line}", path.display())]
    Decode {
        /// File being decoded
        path: PathBuf,
        /// 1-based line number
        line: usize,
    },

    /// I/O error with the path that caused it
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build a validation error from any message
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
