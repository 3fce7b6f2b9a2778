//! Error handling for tandem Core.
//!
//! The zip adaptors and algorithms are infallible by contract: lengths and
//! ranges are caller preconditions, exactly as with native slices. Errors only
//! surface from the checked entry points (`Zip::try_new`, `try_get`,
//! `try_row`), which trade a length or bounds check for a recoverable value.

/// The main error type for tandem Core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A zipped part does not have as many rows as the first part.
    #[error("Length mismatch: column {column} has {found} rows, expected {expected}")]
    LengthMismatch {
        /// Position of the offending part inside the zip.
        column: usize,
        /// Row count of the first part.
        expected: usize,
        /// Row count of the offending part.
        found: usize,
    },

    /// A row index outside `0..len`.
    #[error("Index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// A specialized Result type for tandem Core operations.
pub type Result<T> = core::result::Result<T, Error>;
