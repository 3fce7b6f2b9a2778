//! Pairwise comparison and copying between two sequences.
//!
//! The two sequences may have different row types, so these functions take
//! row-valued predicates instead of cursor predicates.

use crate::adapters::cursor::Cursor;
use crate::foundation::proxy::Snapshot;
use crate::foundation::sequence::{Sequence, SequenceMut};

/// Finds the first row where `a` and `b` differ.
///
/// Returns a cursor into each sequence at that row. When the common prefix
/// has no mismatch both cursors sit at the shorter length.
pub fn mismatch<'a, 'b, A, B>(a: &'a A, b: &'b B) -> (Cursor<'a, A>, Cursor<'b, B>)
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Ref<'a>: PartialEq<B::Ref<'b>>,
{
    mismatch_by(a, b, |x, y| x == y)
}

/// [`mismatch`] under `eq`.
pub fn mismatch_by<'a, 'b, A, B, F>(a: &'a A, b: &'b B, mut eq: F) -> (Cursor<'a, A>, Cursor<'b, B>)
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(A::Ref<'a>, B::Ref<'b>) -> bool,
{
    let common = a.len().min(b.len());
    let pos = (0..common)
        .find(|&i| !eq(a.row(i), b.row(i)))
        .unwrap_or(common);
    (Cursor::new(a, pos), Cursor::new(b, pos))
}

/// Whether `a` and `b` have the same length and equal rows.
pub fn equal<'a, 'b, A, B>(a: &'a A, b: &'b B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Ref<'a>: PartialEq<B::Ref<'b>>,
{
    equal_by(a, b, |x, y| x == y)
}

/// [`equal`] under `eq`.
pub fn equal_by<'a, 'b, A, B, F>(a: &'a A, b: &'b B, eq: F) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(A::Ref<'a>, B::Ref<'b>) -> bool,
{
    a.len() == b.len() && mismatch_by(a, b, eq).0.is_end()
}

/// Writes every row of `src` into the rows of `dst` with the same index and
/// returns the number of rows written.
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
pub fn copy_to<'a, S, D>(src: &'a S, dst: &mut D) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    S::Ref<'a>: Snapshot<Owned = D::Item>,
{
    let count = src.len();
    assert!(
        dst.len() >= count,
        "destination has {} rows, source has {count}",
        dst.len()
    );
    for i in 0..count {
        dst.replace_row(i, src.row(i).snapshot());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::zip::zip;
    use crate::foundation::sequence::SequenceExt;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_mismatch_between_zips() {
        let a = vec![1, 2, 3, 4];
        let b = vec![5, 6, 7, 8];
        let c = vec![5, 6, 0, 8];
        let left = zip((&a, &b));
        let right = zip((&a, &c));

        let (l, r) = mismatch(&left, &right);
        assert_eq!(l.index(), 2);
        assert_eq!(r.index(), 2);
        assert_eq!(l.get().1, &7);
        assert_eq!(r.get().1, &0);

        let (r, l) = mismatch(&right, &left);
        assert_eq!((r.index(), l.index()), (2, 2));
    }

    #[test]
    fn test_mismatch_against_pairs_by_field() {
        let a = vec![1, 2, 3];
        let b = vec!['a', 'b', 'c'];
        let pairs = vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')];
        let z = zip((&a, &b));

        let (zc, pc) = mismatch_by(&z, &pairs, |row, pair| *row.0 == pair.0 && *row.1 == pair.1);
        assert!(zc.is_end());
        assert_eq!(pc.index(), 3);
        assert!(!equal_by(&z, &pairs, |row, pair| row.snapshot() == *pair));
        assert!(equal_by(&z, &pairs[..3], |row, pair| row.snapshot() == *pair));
    }

    #[test]
    fn test_equal() {
        let a = vec![1, 2];
        let b = vec![1, 2];
        assert!(equal(&a, &b));
        assert!(!equal(&a, &b[..1]));
    }

    #[test]
    fn test_copy_to_zip() {
        let pairs = vec![(3, 'c'), (1, 'a')];
        let mut a = vec![0; 2];
        let mut b = vec![' '; 2];
        let written = copy_to(&pairs, &mut zip((&mut a, &mut b)));
        assert_eq!(written, 2);
        assert_eq!(a, vec![3, 1]);
        assert_eq!(b, vec!['c', 'a']);
    }

    #[test]
    fn test_copy_zip_to_pairs() {
        let a = vec![1, 2, 3];
        let b = vec![4, 5, 6];
        let mut pairs = vec![(0, 0); 4];
        let z = zip((&a, &b));
        assert_eq!(copy_to(&z, &mut pairs), 3);
        assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6), (0, 0)]);
        assert_eq!(z.to_rows(), pairs[..3].to_vec());
    }

    #[test]
    #[should_panic(expected = "destination has 1 rows")]
    fn test_copy_to_short_destination() {
        let src = vec![1, 2];
        let mut dst: Vec<i32> = vec![0];
        copy_to(&src, &mut dst);
    }
}
