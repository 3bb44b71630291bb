//! Error types for catalog construction, task building and shape file loading
//!
//! An infeasible packing is not an error: the solver reports it through its
//! terminal state. Everything here is a configuration problem that must be
//! surfaced before any search starts.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::shape::ShapeId;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackingError {
    /// Shape literal contains no filled cells
    EmptyShape {
        /// Identifier the shape was registered under
        id: ShapeId,
    },

    /// Shape literal is not a rectangular block of equal-length lines
    RaggedShape {
        /// Identifier the shape was registered under
        id: ShapeId,
        /// Zero-based line index of the first offending line
        row: usize,
        /// Length of the first line of the block
        expected: usize,
        /// Length of the offending line
        found: usize,
    },

    /// A catalog entry already exists for this identifier
    DuplicateShape {
        /// The identifier registered twice
        id: ShapeId,
    },

    /// A task references a shape the catalog does not contain
    UnknownShape {
        /// The missing identifier
        id: ShapeId,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape { id } => {
                write!(f, "Shape {id} has no filled cells")
            }
            Self::RaggedShape {
                id,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape {id} is not rectangular: line {row} has {found} cells, expected {expected}"
                )
            }
            Self::DuplicateShape { id } => {
                write!(f, "Shape {id} is already defined")
            }
            Self::UnknownShape { id } => {
                write!(f, "Shape {id} is referenced but never defined")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PackingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

impl From<std::io::Error> for PackingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file involved to an I/O failure
pub trait WithPath<T> {
    /// Convert an I/O error into a [`PackingError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PackingError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
