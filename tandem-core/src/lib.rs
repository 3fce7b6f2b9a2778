//! # Tandem Core
//!
//! Lockstep random-access zipping of parallel sequences.
//!
//! A [`Zip`](adapters::zip::Zip) wraps two to six sequences of possibly
//! different element types and presents them as one sequence of tuples
//! without materializing it. Sorting, heap operations, deduplication and
//! mismatch search run on a zip exactly as they run on a single `Vec`, and
//! every reordering is applied to all parts at once.
//!
//! ## Architecture
//!
//! The library is organized into three layers:
//!
//! 1. **Foundation Layer**: the random-access capability traits, row proxy
//!    semantics and error handling
//! 2. **Adapters Layer**: the zip itself, reversed views, cursors and range
//!    views
//! 3. **Algorithms Layer**: generic algorithms written only against the
//!    foundation traits
//!
//! ## Example
//!
//! ```rust
//! use tandem_core::prelude::*;
//!
//! let mut ids = vec![30, 10, 20, 10];
//! let mut scores = vec![0.5, 0.9, 0.1, 0.9];
//! let mut names = vec!["c", "a", "b", "a"];
//!
//! let mut table = zip((&mut ids, &mut scores, &mut names));
//! sort_by(&mut table, less_first);
//! dedup_by(&mut table, eq_first);
//!
//! assert_eq!(ids, [10, 20, 30]);
//! assert_eq!(names, ["a", "b", "c"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rustdoc::all
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]
#![forbid(unsafe_code)]

extern crate alloc;

// Foundation layer modules
pub mod foundation {
    //! Foundation layer: capability traits, row proxies and errors.

    pub mod error;
    pub mod proxy;
    pub mod sequence;
}

// Adapter layer modules
pub mod adapters {
    //! Sequence adapters and positional views.
    pub mod cursor;
    pub mod range;
    pub mod reversed;
    pub mod zip;
}

// Algorithm layer modules
pub mod algorithms {
    //! Generic algorithms over the capability traits.

    pub mod compare;
    pub mod dedup;
    pub mod heap;
    pub mod search;
    pub mod sort;
}

// Re-exports for convenience
pub mod prelude {
    //! Common imports for users of the library.
    pub use crate::adapters::{
        cursor::Cursor,
        range::{LendingIterator, Rows, RowsMut},
        reversed::Reversed,
        zip::{try_zip, zip, Head, Zip, ZipParts},
    };
    pub use crate::algorithms::{
        compare::{eq_first, less_first, natural_eq, natural_less},
        dedup::{dedup, dedup_by, unique, unique_by, unique_copy, unique_copy_by},
        heap::{
            is_heap, is_heap_by, make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap,
            push_heap_by, sort_heap, sort_heap_by,
        },
        search::{copy_to, equal, equal_by, mismatch, mismatch_by},
        sort::{is_sorted, is_sorted_by, quicksort, quicksort_by, sort, sort_by},
    };
    pub use crate::foundation::{
        error::{Error, Result},
        proxy::{Assign, Snapshot, SwapWith},
        sequence::{OrdRows, Sequence, SequenceExt, SequenceMut, Truncate},
    };
}

// Version information
/// The version of the Tandem Core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The minimum supported Rust version.
pub const MSRV: &str = "1.81.0";
