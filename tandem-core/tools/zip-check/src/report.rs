//! Check failures and row comparison.

use std::fmt::Debug;
use std::io::{self, Write};

/// A failed check.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The two results have different row counts.
    #[error("{stage}: size differs, expected {expected} rows, found {found}")]
    SizeDiffers {
        /// Check that failed.
        stage: &'static str,
        /// Row count of the materialized result.
        expected: usize,
        /// Row count of the zipped result.
        found: usize,
    },

    /// The two results differ at a row.
    #[error("{stage}: element {index} differs")]
    RowDiffers {
        /// Check that failed.
        stage: &'static str,
        /// First differing row.
        index: usize,
    },

    /// Invalid run configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the zip library.
    #[error(transparent)]
    Core(#[from] tandem_core::foundation::error::Error),
}

/// Result type of the check suite.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Compares two result tables row by row.
///
/// Reports a size difference first, then the first differing row.
pub fn compare_rows<T>(stage: &'static str, expected: &[T], found: &[T]) -> Result<()>
where
    T: PartialEq + Debug,
{
    if expected.len() != found.len() {
        return Err(CheckError::SizeDiffers {
            stage,
            expected: expected.len(),
            found: found.len(),
        });
    }

    if let Some(index) = expected.iter().zip(found).position(|(e, f)| e != f) {
        log::debug!(
            "{}: row {} expected {:?}, found {:?}",
            stage,
            index,
            expected[index],
            found[index]
        );
        return Err(CheckError::RowDiffers { stage, index });
    }

    log::debug!("{}: {} rows match", stage, expected.len());
    Ok(())
}

/// Fails with [`CheckError::SizeDiffers`] unless `found == expected`.
pub fn expect_count(stage: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CheckError::SizeDiffers {
            stage,
            expected,
            found,
        })
    }
}

/// Writes the failure line for `err`, independent of the log filter.
pub fn write_failure<W: Write>(out: &mut W, err: &CheckError) -> io::Result<()> {
    writeln!(out, "FAILED {err}")
}
