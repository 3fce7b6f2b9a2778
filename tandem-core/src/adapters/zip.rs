//! Lockstep zip over N parallel sequences.
//!
//! `Zip<(S0, S1, ..)>` addresses row `i` of every part at once. It is itself a
//! [`Sequence`], so zips nest: `Zip<(Zip<(A, B)>, C)>` has rows shaped
//! `((a, b), c)`.
//!
//! ```
//! use tandem_core::prelude::*;
//!
//! let mut keys = vec![3, 1, 2];
//! let mut names = vec!["c", "a", "b"];
//!
//! let mut rows = zip((&mut keys, &mut names));
//! sort(&mut rows);
//!
//! assert_eq!(keys, [1, 2, 3]);
//! assert_eq!(names, ["a", "b", "c"]);
//! ```
//!
//! A zip holding a read-only part cannot be handed to a mutating algorithm:
//!
//! ```compile_fail
//! use tandem_core::prelude::*;
//!
//! let keys = vec![3, 1, 2];
//! let mut names = vec!["c", "a", "b"];
//!
//! let mut rows = zip((&keys, &mut names));
//! sort(&mut rows);
//! ```

use core::cmp::Ordering;

use crate::foundation::{
    error::{Error, Result},
    sequence::{OrdRows, Sequence, SequenceMut, Truncate},
};

/// N sequences addressed in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zip<T> {
    parts: T,
}

/// Tuples of sequences that can be zipped.
pub trait ZipParts {
    /// Checks that every part has as many rows as the first one and returns
    /// that row count.
    fn check_lengths(&self) -> Result<usize>;
}

/// Access to the first zipped part.
pub trait Head: Sequence {
    /// Type of the first part.
    type Head: Sequence;

    /// Returns the first part.
    fn head(&self) -> &Self::Head;
}

impl<T: ZipParts> Zip<T> {
    /// Zips `parts` without checking their lengths in release builds.
    ///
    /// Rows past the shortest part panic on access.
    #[inline]
    pub fn new(parts: T) -> Self {
        debug_assert!(
            parts.check_lengths().is_ok(),
            "zipped sequences must have equal lengths"
        );
        Self { parts }
    }

    /// Zips `parts`, rejecting parts whose length differs from the first.
    pub fn try_new(parts: T) -> Result<Self> {
        parts.check_lengths()?;
        Ok(Self { parts })
    }
}

impl<T> Zip<T> {
    /// Returns the wrapped sequences.
    #[inline]
    pub const fn parts(&self) -> &T {
        &self.parts
    }

    /// Returns the wrapped sequences mutably.
    #[inline]
    pub fn parts_mut(&mut self) -> &mut T {
        &mut self.parts
    }

    /// Unwraps the zip.
    #[inline]
    pub fn into_parts(self) -> T {
        self.parts
    }
}

/// Zips a tuple of sequences. See [`Zip::new`].
#[inline]
pub fn zip<T: ZipParts>(parts: T) -> Zip<T> {
    Zip::new(parts)
}

/// Zips a tuple of sequences, checking lengths. See [`Zip::try_new`].
#[inline]
pub fn try_zip<T: ZipParts>(parts: T) -> Result<Zip<T>> {
    Zip::try_new(parts)
}

macro_rules! impl_zip {
    ($H:ident $hidx:tt $(, $S:ident $idx:tt)+) => {
        impl<$H: Sequence, $($S: Sequence),+> ZipParts for ($H, $($S,)+) {
            fn check_lengths(&self) -> Result<usize> {
                let expected = self.$hidx.len();
                $(
                    let found = self.$idx.len();
                    if found != expected {
                        log::debug!(
                            "zip part {} has {} rows, expected {}",
                            $idx,
                            found,
                            expected
                        );
                        return Err(Error::LengthMismatch {
                            column: $idx,
                            expected,
                            found,
                        });
                    }
                )+
                Ok(expected)
            }
        }

        impl<$H: Sequence, $($S: Sequence),+> Sequence for Zip<($H, $($S,)+)> {
            type Item = (<$H as Sequence>::Item, $(<$S as Sequence>::Item,)+);
            type Ref<'a> = (<$H as Sequence>::Ref<'a>, $(<$S as Sequence>::Ref<'a>,)+)
            where
                Self: 'a;

            #[inline]
            fn len(&self) -> usize {
                self.parts.$hidx.len()
            }

            #[inline]
            fn row(&self, index: usize) -> Self::Ref<'_> {
                (self.parts.$hidx.row(index), $(self.parts.$idx.row(index),)+)
            }
        }

        impl<$H: SequenceMut, $($S: SequenceMut),+> SequenceMut for Zip<($H, $($S,)+)> {
            type RefMut<'a> = (<$H as SequenceMut>::RefMut<'a>, $(<$S as SequenceMut>::RefMut<'a>,)+)
            where
                Self: 'a;

            #[inline]
            fn row_mut(&mut self, index: usize) -> Self::RefMut<'_> {
                (self.parts.$hidx.row_mut(index), $(self.parts.$idx.row_mut(index),)+)
            }

            #[inline]
            fn swap_rows(&mut self, a: usize, b: usize) {
                self.parts.$hidx.swap_rows(a, b);
                $(self.parts.$idx.swap_rows(a, b);)+
            }

            #[inline]
            fn replace_row(&mut self, index: usize, value: Self::Item) -> Self::Item {
                (
                    self.parts.$hidx.replace_row(index, value.$hidx),
                    $(self.parts.$idx.replace_row(index, value.$idx),)+
                )
            }
        }

        impl<$H: Truncate, $($S: Truncate),+> Truncate for Zip<($H, $($S,)+)> {
            #[inline]
            fn truncate(&mut self, len: usize) {
                self.parts.$hidx.truncate(len);
                $(self.parts.$idx.truncate(len);)+
            }
        }

        impl<$H: OrdRows, $($S: OrdRows),+> OrdRows for Zip<($H, $($S,)+)> {
            #[inline]
            fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
            where
                Self: 'a,
            {
                <$H as OrdRows>::cmp_refs(&a.$hidx, &b.$hidx)
                    $(.then_with(|| <$S as OrdRows>::cmp_refs(&a.$idx, &b.$idx)))+
            }

            #[inline]
            fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
            where
                Self: 'a,
            {
                <$H as OrdRows>::eq_refs(&a.$hidx, &b.$hidx)
                    $(&& <$S as OrdRows>::eq_refs(&a.$idx, &b.$idx))+
            }
        }

        impl<$H: Sequence, $($S: Sequence),+> Head for Zip<($H, $($S,)+)> {
            type Head = $H;

            #[inline]
            fn head(&self) -> &$H {
                &self.parts.$hidx
            }
        }
    };
}

impl_zip!(A 0, B 1);
impl_zip!(A 0, B 1, C 2);
impl_zip!(A 0, B 1, C 2, D 3);
impl_zip!(A 0, B 1, C 2, D 3, E 4);
impl_zip!(A 0, B 1, C 2, D 3, E 4, F 5);
