//! # Zip Check
//!
//! Randomized equivalence checks for the tandem zip adaptors.
//!
//! Every check runs an algorithm once on zipped columns and once on the same
//! rows materialized as a `Vec` of tuples, then compares the two results row
//! by row.

#![warn(clippy::all, clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod data;
pub mod report;
pub mod suite;

pub use config::CheckConfig;
pub use report::{CheckError, Result};
pub use suite::{run_all, CHECKS};
