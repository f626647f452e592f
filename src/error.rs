//! Error types for echelon
//!
//! Elimination and classification never fail. Errors only arise at the
//! boundary: building a [`Matrix`](crate::matrix::Matrix) from untrusted
//! rows, parsing text input, or selecting a presentation mode.

use thiserror::Error;

/// Result type alias using echelon's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or reading a system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The system has no rows
    #[error("Empty matrix: a system needs at least one equation")]
    EmptyMatrix,

    /// The augmented matrix is too narrow to hold an unknown and a RHS
    #[error("Too few columns: got {cols}, need at least 2 (one unknown and the right-hand side)")]
    TooFewColumns {
        /// Column count of the rejected matrix
        cols: usize,
    },

    /// A row's length differs from the first row's
    #[error("Ragged row {row}: expected {expected} columns, got {got}")]
    RaggedRow {
        /// 1-based index of the offending row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        got: usize,
    },

    /// A token in text input is not a number
    #[error("Cannot parse '{token}' as a number at line {line}, column {column}")]
    Parse {
        /// 1-based line number, counting only non-empty lines
        line: usize,
        /// 1-based column (field) number
        column: usize,
        /// The offending token, trimmed
        token: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a ragged row error from a 0-based row index
    pub fn ragged(row: usize, expected: usize, got: usize) -> Self {
        Self::RaggedRow {
            row: row + 1,
            expected,
            got,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
