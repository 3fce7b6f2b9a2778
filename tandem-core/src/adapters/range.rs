//! Range views over a sequence.
//!
//! [`Rows`] is a read-only, double-ended iterator built from a begin/end
//! cursor pair. [`RowsMut`] hands out mutable row proxies one at a time; since
//! each proxy borrows the view, it is a [`LendingIterator`] rather than an
//! [`Iterator`].

use core::fmt;
use core::iter::FusedIterator;

use crate::adapters::{cursor::Cursor, zip::Zip};
use crate::foundation::sequence::{Sequence, SequenceMut};

// ============================================================================
// Read-only view
// ============================================================================

/// Iterator over the rows between two cursors.
pub struct Rows<'s, S: ?Sized> {
    front: Cursor<'s, S>,
    back: Cursor<'s, S>,
}

impl<S: ?Sized> Clone for Rows<'_, S> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: ?Sized> fmt::Debug for Rows<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("front", &self.front.index())
            .field("back", &self.back.index())
            .finish()
    }
}

impl<'s, S: Sequence + ?Sized> Rows<'s, S> {
    /// View over every row of `seq`.
    pub fn new(seq: &'s S) -> Self {
        Self {
            front: Cursor::new(seq, 0),
            back: Cursor::new(seq, seq.len()),
        }
    }

    /// View over `[begin, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` precedes `begin`.
    pub fn between(begin: Cursor<'s, S>, end: Cursor<'s, S>) -> Self {
        assert!(begin <= end, "range end precedes its begin");
        Self {
            front: begin,
            back: end,
        }
    }

    /// Cursor at the next row to be yielded from the front.
    pub const fn begin(&self) -> Cursor<'s, S> {
        self.front
    }

    /// Cursor one past the next row to be yielded from the back.
    pub const fn end(&self) -> Cursor<'s, S> {
        self.back
    }
}

impl<'s, S: Sequence + ?Sized> Iterator for Rows<'s, S> {
    type Item = S::Ref<'s>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = self.front.get();
        self.front.step();
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.back - self.front).unwrap_or(0);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match isize::try_from(n) {
            Ok(offset) if offset < self.back - self.front => {
                self.front += offset;
                self.next()
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Rows<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back();
        Some(self.back.get())
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Rows<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Rows<'_, S> {}

impl<'s, T> IntoIterator for &'s Zip<T>
where
    Zip<T>: Sequence,
{
    type Item = <Zip<T> as Sequence>::Ref<'s>;
    type IntoIter = Rows<'s, Zip<T>>;

    fn into_iter(self) -> Self::IntoIter {
        Rows::new(self)
    }
}

// ============================================================================
// Mutable view
// ============================================================================

/// An iterator whose items borrow from the iterator itself.
pub trait LendingIterator {
    /// Item type, borrowing the iterator for `'a`.
    type Item<'a>
    where
        Self: 'a;

    /// Advances and returns the next item.
    fn next(&mut self) -> Option<Self::Item<'_>>;
}

/// Mutable rows of a sequence, front to back.
///
/// ```
/// use tandem_core::prelude::*;
///
/// let mut a = vec![1, 2, 3];
/// let mut b = vec![4, 5, 6];
/// let mut z = zip((&mut a, &mut b));
///
/// let mut rows = z.rows_mut();
/// while let Some((x, y)) = rows.next() {
///     core::mem::swap(x, y);
/// }
/// assert_eq!(a, [4, 5, 6]);
/// ```
pub struct RowsMut<'s, S: ?Sized> {
    seq: &'s mut S,
    front: usize,
    back: usize,
}

impl<'s, S: SequenceMut + ?Sized> RowsMut<'s, S> {
    /// View over every row of `seq`.
    pub fn new(seq: &'s mut S) -> Self {
        let back = seq.len();
        Self {
            seq,
            front: 0,
            back,
        }
    }

    /// Takes the last remaining row.
    pub fn next_back(&mut self) -> Option<S::RefMut<'_>> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.row_mut(self.back))
    }

    /// Rows not yet yielded.
    pub const fn len(&self) -> usize {
        self.back - self.front
    }

    /// Whether every row has been yielded.
    pub const fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<S: SequenceMut + ?Sized> LendingIterator for RowsMut<'_, S> {
    type Item<'a> = S::RefMut<'a> where Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(self.seq.row_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::zip::zip;
    use crate::foundation::sequence::SequenceExt;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_rows_forward_and_back() {
        let a = vec![1, 2, 3];
        let b = vec!['a', 'b', 'c'];
        let z = zip((&a, &b));

        let fwd: Vec<_> = z.rows().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(fwd, vec![(1, 'a'), (2, 'b'), (3, 'c')]);

        let back: Vec<_> = z.rows().rev().map(|(x, _)| *x).collect();
        assert_eq!(back, vec![3, 2, 1]);
    }

    #[test]
    fn test_rows_len_and_nth() {
        let data = vec![5, 6, 7, 8];
        let mut rows = data.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.nth(2), Some(&7));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.nth(3), None);
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn test_rows_between_cursors() {
        let data = vec![1, 2, 3, 4, 5];
        let rows = Rows::between(data.begin() + 1, data.end() - 1);
        assert_eq!(rows.begin().index(), 1);
        assert_eq!(rows.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_for_loop_over_zip() {
        let a = vec![1, 2];
        let b = vec![3, 4];
        let mut sum = 0;
        for (x, y) in &zip((&a, &b)) {
            sum += x * y;
        }
        assert_eq!(sum, 11);
    }

    #[test]
    fn test_rows_mut_both_ends() {
        let mut data = vec![1, 2, 3];
        let mut rows = data.rows_mut();
        *rows.next_back().unwrap() = 30;
        *rows.next().unwrap() = 10;
        assert_eq!(rows.len(), 1);
        assert!(rows.next().is_some());
        assert!(rows.is_empty());
        assert!(rows.next().is_none());
        assert_eq!(data, vec![10, 2, 30]);
    }
}
