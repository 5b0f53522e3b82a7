//! Error types for operations whose contract can be violated by the caller.

use std::fmt;

/// Result type for fallible sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Errors that can occur when consuming sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Index beyond the length of the sequence
    IndexUnavailable { index: usize },
    /// Attempted in-place structural change of an immutable sequence
    UnsupportedMutation { operation: &'static str },
    /// Duplicate key while building a map without a merge function
    KeyCollision { key: String },
    /// Element of the wrong shape for the requested conversion
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::IndexUnavailable { index } => {
                write!(f, "Index out of range: {}", index)
            }
            SeqError::UnsupportedMutation { operation } => {
                write!(f, "Unsupported operation on immutable sequence: {}", operation)
            }
            SeqError::KeyCollision { key } => {
                write!(f, "Duplicate key: {}", key)
            }
            SeqError::TypeMismatch { expected, found } => {
                write!(f, "Expected {}, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for SeqError {}
