//! Back-to-front view of a sequence.

use core::cmp::Ordering;

use crate::foundation::sequence::{OrdRows, Sequence, SequenceMut};

/// Addresses row `i` of the wrapped sequence as row `len - 1 - i`.
///
/// Sorting a `Reversed` view sorts the underlying sequence in descending
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reversed<S> {
    inner: S,
}

impl<S> Reversed<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped sequence.
    pub const fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[inline]
fn mirror(len: usize, index: usize) -> usize {
    assert!(
        index < len,
        "index {index} out of range for sequence of length {len}"
    );
    len - 1 - index
}

impl<S: Sequence> Sequence for Reversed<S> {
    type Item = S::Item;
    type Ref<'a> = S::Ref<'a> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn row(&self, index: usize) -> Self::Ref<'_> {
        self.inner.row(mirror(self.inner.len(), index))
    }
}

impl<S: SequenceMut> SequenceMut for Reversed<S> {
    type RefMut<'a> = S::RefMut<'a> where Self: 'a;

    #[inline]
    fn row_mut(&mut self, index: usize) -> Self::RefMut<'_> {
        let index = mirror(self.inner.len(), index);
        self.inner.row_mut(index)
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        let len = self.inner.len();
        self.inner.swap_rows(mirror(len, a), mirror(len, b));
    }

    #[inline]
    fn replace_row(&mut self, index: usize, value: Self::Item) -> Self::Item {
        let index = mirror(self.inner.len(), index);
        self.inner.replace_row(index, value)
    }
}

impl<S: OrdRows> OrdRows for Reversed<S> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::zip::zip;
    use crate::foundation::sequence::SequenceExt;
    use alloc::vec;

    #[test]
    fn test_reads_back_to_front() {
        let data = vec![1, 2, 3];
        let rev = (&data).reversed();
        assert_eq!(*rev.row(0), 3);
        assert_eq!(rev.to_rows(), vec![3, 2, 1]);
    }

    #[test]
    fn test_writes_land_mirrored() {
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5, 6];
        let mut rev = zip((&mut a, &mut b)).reversed();
        rev.swap_rows(0, 1);
        let old = rev.replace_row(2, (0, 0));
        assert_eq!(old, (1, 4));
        assert_eq!(a, vec![0, 3, 2]);
        assert_eq!(b, vec![0, 6, 5]);
    }

    #[test]
    fn test_unwraps_to_inner() {
        let mut data = vec![1, 2, 3];
        let mut rev = (&mut data).reversed();
        rev.replace_row(0, 9);
        assert_eq!(rev.get_ref().as_slice(), &[1, 2, 9]);
        rev.into_inner().push(4);
        assert_eq!(data, vec![1, 2, 9, 4]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_past_end_panics() {
        let data = vec![1];
        let _ = (&data).reversed().row(1);
    }
}
