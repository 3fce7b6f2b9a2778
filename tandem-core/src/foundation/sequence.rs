//! Random-access capability set for tandem Core.
//!
//! Every algorithm in this crate is written against these traits rather than
//! against slices or vectors, which is what lets a [`Zip`](crate::adapters::zip::Zip)
//! stand in for a native sequence.
//!
//! ## Rows and proxies
//!
//! A sequence is addressed by row index. Reading a row yields a proxy
//! ([`Sequence::Ref`]) which, for plain sequences, is simply `&T`, and for a
//! zip is a tuple of the parts' proxies. Mutable access
//! ([`SequenceMut::RefMut`]) works the same way with `&mut T`.
//!
//! Read-only handles (`&[T]`, `&Vec<T>`) implement [`Sequence`] only, so a zip
//! that contains one of them can never reach a mutating algorithm.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::adapters::{
    cursor::Cursor,
    range::{Rows, RowsMut},
    reversed::Reversed,
};
use crate::foundation::error::{Error, Result};
use crate::foundation::proxy::Snapshot;

// ============================================================================
// Core Sequence Traits
// ============================================================================

/// A random-access sequence of rows.
pub trait Sequence {
    /// Owned value of one row.
    type Item;

    /// Read proxy of one row.
    type Ref<'a>
    where
        Self: 'a;

    /// Returns the number of rows.
    fn len(&self) -> usize;

    /// Returns whether the sequence has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the proxy for row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn row(&self, index: usize) -> Self::Ref<'_>;
}

/// A sequence whose rows can be written, swapped and replaced in place.
pub trait SequenceMut: Sequence {
    /// Write proxy of one row.
    type RefMut<'a>
    where
        Self: 'a;

    /// Returns the mutable proxy for row `index`.
    fn row_mut(&mut self, index: usize) -> Self::RefMut<'_>;

    /// Swaps rows `a` and `b`, element-wise in every part.
    fn swap_rows(&mut self, a: usize, b: usize);

    /// Writes `value` into row `index` and returns the previous row.
    fn replace_row(&mut self, index: usize, value: Self::Item) -> Self::Item;
}

/// A sequence that can drop its trailing rows.
pub trait Truncate: Sequence {
    /// Shortens the sequence to `len` rows. No-op if already shorter.
    fn truncate(&mut self, len: usize);
}

/// Natural row ordering.
///
/// Plain sequences order rows by `T: Ord`; zips order them lexicographically
/// across their parts, recursing into nested zips.
pub trait OrdRows: Sequence {
    /// Compares two row proxies.
    fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
    where
        Self: 'a;

    /// Tests two row proxies for equality.
    fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
    where
        Self: 'a,
    {
        Self::cmp_refs(a, b) == Ordering::Equal
    }
}

// ============================================================================
// Slices and vectors
// ============================================================================

impl<T> Sequence for [T] {
    type Item = T;
    type Ref<'a> = &'a T where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn row(&self, index: usize) -> Self::Ref<'_> {
        &self[index]
    }
}

impl<T> SequenceMut for [T] {
    type RefMut<'a> = &'a mut T where Self: 'a;

    #[inline]
    fn row_mut(&mut self, index: usize) -> Self::RefMut<'_> {
        &mut self[index]
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    #[inline]
    fn replace_row(&mut self, index: usize, value: T) -> T {
        core::mem::replace(&mut self[index], value)
    }
}

impl<T: Ord> OrdRows for [T] {
    #[inline]
    fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
    where
        Self: 'a,
    {
        (*a).cmp(*b)
    }

    #[inline]
    fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
    where
        Self: 'a,
    {
        *a == *b
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Ref<'a> = &'a T where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn row(&self, index: usize) -> Self::Ref<'_> {
        &self[index]
    }
}

impl<T> SequenceMut for Vec<T> {
    type RefMut<'a> = &'a mut T where Self: 'a;

    #[inline]
    fn row_mut(&mut self, index: usize) -> Self::RefMut<'_> {
        &mut self[index]
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn replace_row(&mut self, index: usize, value: T) -> T {
        core::mem::replace(&mut self[index], value)
    }
}

impl<T> Truncate for Vec<T> {
    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}

impl<T: Ord> OrdRows for Vec<T> {
    #[inline]
    fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
    where
        Self: 'a,
    {
        (*a).cmp(*b)
    }

    #[inline]
    fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
    where
        Self: 'a,
    {
        *a == *b
    }
}

// ============================================================================
// Borrowed handles
// ============================================================================

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Ref<'a> = S::Ref<'a> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn row(&self, index: usize) -> Self::Ref<'_> {
        (**self).row(index)
    }
}

impl<S: OrdRows + ?Sized> OrdRows for &S {
    #[inline]
    fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
    where
        Self: 'a,
    {
        S::cmp_refs(a, b)
    }

    #[inline]
    fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
    where
        Self: 'a,
    {
        S::eq_refs(a, b)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    type Ref<'a> = S::Ref<'a> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn row(&self, index: usize) -> Self::Ref<'_> {
        (**self).row(index)
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for &mut S {
    type RefMut<'a> = S::RefMut<'a> where Self: 'a;

    #[inline]
    fn row_mut(&mut self, index: usize) -> Self::RefMut<'_> {
        (**self).row_mut(index)
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        (**self).swap_rows(a, b);
    }

    #[inline]
    fn replace_row(&mut self, index: usize, value: Self::Item) -> Self::Item {
        (**self).replace_row(index, value)
    }
}

impl<S: Truncate + ?Sized> Truncate for &mut S {
    #[inline]
    fn truncate(&mut self, len: usize) {
        (**self).truncate(len);
    }
}

impl<S: OrdRows + ?Sized> OrdRows for &mut S {
    #[inline]
    fn cmp_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> Ordering
    where
        Self: 'a,
    {
        S::cmp_refs(a, b)
    }

    #[inline]
    fn eq_refs<'a>(a: &Self::Ref<'a>, b: &Self::Ref<'a>) -> bool
    where
        Self: 'a,
    {
        S::eq_refs(a, b)
    }
}

// ============================================================================
// Extension trait
// ============================================================================

/// Extension methods available on every [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Cursor at row 0.
    fn begin(&self) -> Cursor<'_, Self> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last row.
    fn end(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.len())
    }

    /// Read-only range view over all rows.
    fn rows(&self) -> Rows<'_, Self> {
        Rows::new(self)
    }

    /// Mutable range view over all rows.
    fn rows_mut(&mut self) -> RowsMut<'_, Self>
    where
        Self: SequenceMut,
    {
        RowsMut::new(self)
    }

    /// Returns the proxy for row `index`, or [`Error::OutOfRange`].
    fn try_row(&self, index: usize) -> Result<Self::Ref<'_>> {
        let len = self.len();
        if index < len {
            Ok(self.row(index))
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    /// Materializes every row as an owned value.
    fn to_rows<'a>(&'a self) -> Vec<Self::Item>
    where
        Self::Ref<'a>: Snapshot<Owned = Self::Item>,
    {
        self.rows().map(|row| row.snapshot()).collect()
    }

    /// Wraps the sequence in a view that addresses its rows back to front.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_slice_rows() {
        let data = [3, 1, 2];
        let seq: &[i32] = &data;
        assert_eq!(Sequence::len(seq), 3);
        assert_eq!(*seq.row(1), 1);
    }

    #[test]
    fn test_vec_swap_and_replace() {
        let mut data = vec![1, 2, 3];
        data.swap_rows(0, 2);
        assert_eq!(data, vec![3, 2, 1]);
        let old = data.replace_row(1, 9);
        assert_eq!(old, 2);
        assert_eq!(data, vec![3, 9, 1]);
    }

    #[test]
    fn test_mut_handle_forwards() {
        let mut data = vec![5, 4, 3, 2];
        let mut handle = &mut data;
        *handle.row_mut(0) = 0;
        Truncate::truncate(&mut handle, 2);
        assert_eq!(data, vec![0, 4]);
    }

    #[test]
    fn test_natural_order() {
        let data = vec![1, 2];
        assert_eq!(Vec::<i32>::cmp_refs(&data.row(0), &data.row(1)), Ordering::Less);
        assert!(Vec::<i32>::eq_refs(&data.row(0), &data.row(0)));
    }

    #[test]
    fn test_try_row() {
        let data = vec![1, 2];
        assert_eq!(data.try_row(1).copied(), Ok(2));
        assert_eq!(data.try_row(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_to_rows() {
        let data = vec![(1, 'a'), (2, 'b')];
        assert_eq!(data.to_rows(), data);
    }
}
