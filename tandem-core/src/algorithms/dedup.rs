//! Adjacent-duplicate removal.
//!
//! Each run of consecutive equal rows is represented by its first row.
//! Equality is tested against that representative, not against the
//! immediately preceding row, which only matters for predicates that are not
//! transitive.

use core::iter;

use crate::adapters::cursor::Cursor;
use crate::algorithms::compare::{holds_at, natural_eq};
use crate::foundation::proxy::Snapshot;
use crate::foundation::sequence::{OrdRows, Sequence, SequenceMut, Truncate};

/// Compacts runs of naturally equal rows to the front and returns the number
/// of rows kept. Rows past that count are left in an unspecified order.
pub fn unique<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S) -> usize {
    unique_by(seq, natural_eq::<S>)
}

/// [`unique`] under `eq`.
pub fn unique_by<S, F>(seq: &mut S, mut eq: F) -> usize
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let len = seq.len();
    if len == 0 {
        return 0;
    }
    let mut write = 0;
    for read in 1..len {
        if !holds_at(seq, &mut eq, write, read) {
            write += 1;
            if write != read {
                seq.swap_rows(write, read);
            }
        }
    }
    write + 1
}

/// Removes adjacent naturally equal rows, shrinking every part.
pub fn dedup<S: SequenceMut + Truncate + OrdRows + ?Sized>(seq: &mut S) {
    dedup_by(seq, natural_eq::<S>);
}

/// [`dedup`] under `eq`.
pub fn dedup_by<S, F>(seq: &mut S, eq: F)
where
    S: SequenceMut + Truncate + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let kept = unique_by(seq, eq);
    log::trace!("dedup kept {} of {} rows", kept, seq.len());
    seq.truncate(kept);
}

/// Appends the first row of every run of naturally equal rows to `out` and
/// returns how many rows were appended.
pub fn unique_copy<'a, S, E>(src: &'a S, out: &mut E) -> usize
where
    S: OrdRows + ?Sized,
    S::Ref<'a>: Snapshot<Owned = S::Item>,
    E: Extend<S::Item>,
{
    unique_copy_by(src, out, natural_eq::<S>)
}

/// [`unique_copy`] under `eq`.
pub fn unique_copy_by<'a, S, E, F>(src: &'a S, out: &mut E, mut eq: F) -> usize
where
    S: Sequence + ?Sized,
    S::Ref<'a>: Snapshot<Owned = S::Item>,
    E: Extend<S::Item>,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let mut written = 0;
    let mut run = 0;
    for i in 0..src.len() {
        if i == 0 || !holds_at(src, &mut eq, run, i) {
            run = i;
            written += 1;
            out.extend(iter::once(src.row(i).snapshot()));
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::zip::zip;
    use crate::algorithms::compare::eq_first;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_unique_keeps_first_of_each_run() {
        let mut data = vec![1, 1, 2, 2, 2, 1, 3, 3];
        let kept = unique(&mut data);
        assert_eq!(kept, 4);
        assert_eq!(&data[..kept], &[1, 2, 1, 3]);
    }

    #[test]
    fn test_dedup_zip_truncates_parts() {
        let mut a = vec![1, 1, 1, 2, 2];
        let mut b = vec![0, 0, 5, 5, 5];
        dedup(&mut zip((&mut a, &mut b)));
        assert_eq!(a, vec![1, 1, 2]);
        assert_eq!(b, vec![0, 5, 5]);
    }

    #[test]
    fn test_unique_by_first_field_matches_pairs() {
        let mut a = vec![4, 4, 4, 1, 1, 4];
        let mut b = vec![1, 2, 3, 4, 5, 6];
        let mut pairs: Vec<(i32, i32)> = a.iter().copied().zip(b.iter().copied()).collect();

        let kept = unique_by(&mut zip((&mut a, &mut b)), eq_first);
        pairs.dedup_by_key(|p| p.0);

        assert_eq!(kept, pairs.len());
        let got: Vec<(i32, i32)> = a.iter().copied().zip(b.iter().copied()).take(kept).collect();
        assert_eq!(got, pairs);
    }

    #[test]
    fn test_unique_copy_into_vec() {
        let a = vec![1, 1, 2, 2, 3];
        let b = vec!['x', 'x', 'y', 'z', 'z'];
        let mut out = Vec::new();
        let written = unique_copy(&zip((&a, &b)), &mut out);
        assert_eq!(written, 4);
        assert_eq!(out, vec![(1, 'x'), (2, 'y'), (2, 'z'), (3, 'z')]);

        out.clear();
        let written = unique_copy_by(&zip((&a, &b)), &mut out, eq_first);
        assert_eq!(written, 3);
        assert_eq!(out, vec![(1, 'x'), (2, 'y'), (3, 'z')]);
    }

    #[test]
    fn test_compares_against_run_representative() {
        // "within one" is not transitive: 1~2 and 2~3 but not 1~3.
        let mut data = vec![1_i32, 2, 3, 4];
        let kept = unique_by(&mut data, |a, b| a.get().abs_diff(*b.get()) <= 1);
        assert_eq!(&data[..kept], &[1, 3]);

        let mut out = Vec::new();
        unique_copy_by(&[1_i32, 2, 3, 4][..], &mut out, |a, b| a.get().abs_diff(*b.get()) <= 1);
        assert_eq!(out, vec![1, 3]);
    }

    #[test]
    fn test_empty() {
        let mut data: Vec<i32> = Vec::new();
        assert_eq!(unique(&mut data), 0);
        let mut out = Vec::new();
        assert_eq!(unique_copy(&data, &mut out), 0);
        assert!(out.is_empty());
    }
}
