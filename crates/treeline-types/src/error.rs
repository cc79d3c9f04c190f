//! Error types for the foundation crate.

use thiserror::Error;

/// Errors produced when parsing a canonical path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// An index segment was opened with `[` but never closed.
    #[error("unclosed index segment in path: {0:?}")]
    UnclosedIndex(String),

    /// An index segment did not contain a valid non-negative integer.
    #[error("invalid array index: {0:?}")]
    InvalidIndex(String),

    /// A key segment followed another segment without a `.` separator.
    #[error("missing '.' separator in path: {0:?}")]
    MissingSeparator(String),

    /// A `.` separator was not followed by a key.
    #[error("empty key segment in path: {0:?}")]
    EmptyKey(String),
}
