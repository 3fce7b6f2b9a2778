//! Check run configuration.

use crate::report::{CheckError, Result};

/// Parameters of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Rows per column.
    pub size: usize,

    /// Values are drawn uniformly from `1..=modulus`.
    pub modulus: i32,

    /// Seed of the random generator.
    pub seed: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            modulus: 25,
            seed: 5489,
        }
    }
}

impl CheckConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows.
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the value range.
    #[must_use]
    pub const fn with_modulus(mut self, modulus: i32) -> Self {
        self.modulus = modulus;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(CheckError::Config("size must be greater than 0".to_string()));
        }

        if self.modulus < 1 {
            return Err(CheckError::Config(format!(
                "modulus must be at least 1, got {}",
                self.modulus
            )));
        }

        Ok(())
    }
}
