//! Error types for chainable collections.
//!
//! Every fallible operation in this crate returns [`ChainError`] through the
//! [`Result`] alias. Errors surface at the point where a value is actually
//! demanded: building a lazy pipeline never fails, consuming it may.

use thiserror::Error;

/// Errors raised by chainable collection operations.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// let empty: ChainList<i32> = ChainList::new();
/// assert_eq!(
///     empty.reduce(|left, right| left + right),
///     Err(ChainError::EmptySequence { operation: "reduce" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// An operation that needs at least one element ran on an empty source.
    #[error("{operation} called on an empty sequence")]
    EmptySequence {
        /// The operation that failed.
        operation: &'static str,
    },

    /// Positional access past the end of a non-empty source.
    #[error("index {index} is out of range for a sequence of length {length}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of elements that were available.
        length: usize,
    },

    /// A flat key/value argument list had an odd number of elements.
    #[error("expected an even number of key-value arguments, got {count}")]
    InvalidArity {
        /// The number of arguments received.
        count: usize,
    },

    /// An element had the wrong shape for the requested operation.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Description of the expected shape.
        expected: &'static str,
        /// Name of the shape that was found.
        found: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ChainError::EmptySequence { operation: "first" }, "first called on an empty sequence")]
    #[case(
        ChainError::IndexOutOfRange { index: 5, length: 3 },
        "index 5 is out of range for a sequence of length 3"
    )]
    #[case(
        ChainError::InvalidArity { count: 3 },
        "expected an even number of key-value arguments, got 3"
    )]
    #[case(
        ChainError::TypeMismatch { expected: "key-value pair", found: "integer" },
        "expected key-value pair, found integer"
    )]
    fn test_error_display(#[case] error: ChainError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
