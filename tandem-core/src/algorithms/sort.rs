//! In-place sorting.
//!
//! [`sort_by`] is an unstable introsort: median-of-three Hoare partitioning,
//! insertion sort for short runs and a heapsort fallback once recursion gets
//! deeper than `2 * log2(n)`. [`quicksort_by`] is a plain midpoint-pivot
//! Lomuto quicksort, kept as an independent reference implementation.

use crate::adapters::cursor::Cursor;
use crate::algorithms::compare::{holds_at, natural_less};
use crate::algorithms::heap::heapsort_range;
use crate::foundation::sequence::{OrdRows, Sequence, SequenceMut};

/// Runs at or below this many rows are insertion sorted.
const INSERTION_THRESHOLD: usize = 16;

// ============================================================================
// Introsort
// ============================================================================

/// Sorts the rows in ascending natural order.
pub fn sort<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S) {
    sort_by(seq, natural_less::<S>);
}

/// Sorts the rows so that no row is `less` than its predecessor.
///
/// `less` should be a strict weak ordering. A non-strict predicate such as
/// `<=` still yields sorted rows but does more swaps. The sort is not stable.
pub fn sort_by<S, F>(seq: &mut S, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    introsort(seq, 0, len, 2 * len.ilog2(), &mut less);
}

fn introsort<S, F>(seq: &mut S, mut lo: usize, mut hi: usize, mut depth: u32, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    while hi - lo > INSERTION_THRESHOLD {
        if depth == 0 {
            log::trace!("introsort depth limit reached on {} rows, switching to heapsort", hi - lo);
            heapsort_range(seq, lo, hi, less);
            return;
        }
        depth -= 1;

        let cut = partition(seq, lo, hi, less);
        // Recurse into the smaller side, loop on the larger one.
        if cut - lo < hi - cut {
            introsort(seq, lo, cut, depth, less);
            lo = cut + 1;
        } else {
            introsort(seq, cut + 1, hi, depth, less);
            hi = cut;
        }
    }
    insertion_sort(seq, lo, hi, less);
}

/// Moves the median of rows `lo`, `mid` and `last` to `lo` and the largest of
/// them to `last`.
fn median_to_front<S, F>(seq: &mut S, lo: usize, mid: usize, last: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    if holds_at(seq, less, lo, mid) {
        seq.swap_rows(lo, mid);
    }
    if holds_at(seq, less, last, lo) {
        seq.swap_rows(lo, last);
        if holds_at(seq, less, lo, mid) {
            seq.swap_rows(lo, mid);
        }
    }
}

/// Hoare partition of `lo..hi` around the median of three. Returns the final
/// pivot row: rows before it are not greater, rows after it are not less.
fn partition<S, F>(seq: &mut S, lo: usize, hi: usize, less: &mut F) -> usize
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let last = hi - 1;
    median_to_front(seq, lo, lo + (hi - lo) / 2, last, less);

    let mut i = lo;
    let mut j = hi;
    loop {
        i += 1;
        while i < last && holds_at(seq, less, i, lo) {
            i += 1;
        }
        j -= 1;
        while j > lo && holds_at(seq, less, lo, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        seq.swap_rows(i, j);
    }
    seq.swap_rows(lo, j);
    j
}

fn insertion_sort<S, F>(seq: &mut S, lo: usize, hi: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && holds_at(seq, less, j, j - 1) {
            seq.swap_rows(j, j - 1);
            j -= 1;
        }
    }
}

// ============================================================================
// Reference quicksort
// ============================================================================

/// Sorts the rows in ascending natural order with [`quicksort_by`].
pub fn quicksort<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S) {
    quicksort_by(seq, natural_less::<S>);
}

/// Midpoint-pivot Lomuto quicksort.
///
/// Slower than [`sort_by`] and quadratic on adversarial input, but simple
/// enough to cross-check it. Recursion always takes the smaller partition,
/// so stack depth stays logarithmic.
pub fn quicksort_by<S, F>(seq: &mut S, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let len = seq.len();
    if len > 1 {
        quicksort_inclusive(seq, 0, len - 1, &mut less);
    }
}

/// Sorts rows `lo..=hi`.
fn quicksort_inclusive<S, F>(seq: &mut S, mut lo: usize, mut hi: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    while lo < hi {
        let dist = hi - lo;
        if dist == 1 {
            if holds_at(seq, less, hi, lo) {
                seq.swap_rows(lo, hi);
            }
            return;
        }

        // Park the midpoint pivot at `hi`.
        seq.swap_rows(lo + dist / 2, hi);
        let mut store = lo;
        for i in lo..hi {
            if holds_at(seq, less, i, hi) {
                seq.swap_rows(i, store);
                store += 1;
            }
        }
        seq.swap_rows(hi, store);

        if store - lo < hi - store {
            if store > lo {
                quicksort_inclusive(seq, lo, store - 1, less);
            }
            lo = store + 1;
        } else {
            // `hi - lo >= 2` here, so the left side is never empty.
            if store < hi {
                quicksort_inclusive(seq, store + 1, hi, less);
            }
            hi = store - 1;
        }
    }
}

// ============================================================================
// Checks
// ============================================================================

/// Whether the rows are in ascending natural order.
pub fn is_sorted<S: OrdRows + ?Sized>(seq: &S) -> bool {
    is_sorted_by(seq, natural_less::<S>)
}

/// Whether no row is `less` than its predecessor.
pub fn is_sorted_by<S, F>(seq: &S, mut less: F) -> bool
where
    S: Sequence + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    (1..seq.len()).all(|i| !holds_at(seq, &mut less, i, i - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::zip::zip;
    use crate::algorithms::compare::less_first;
    use crate::foundation::sequence::SequenceExt;
    use alloc::vec;
    use alloc::vec::Vec;

    fn scrambled(len: usize, modulus: u32) -> Vec<u32> {
        // Small LCG, enough to avoid sorted or periodic input.
        let mut state = 0x2545_f491_u32;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) % modulus
            })
            .collect()
    }

    #[test]
    fn test_sort_vec() {
        let mut data = scrambled(500, 40);
        let mut expected = data.clone();
        expected.sort_unstable();
        sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_zip_matches_pairs() {
        let mut a = scrambled(300, 7);
        let mut b = scrambled(300, 11);
        b.reverse();
        let mut pairs: Vec<(u32, u32)> = a.iter().copied().zip(b.iter().copied()).collect();
        pairs.sort_unstable();

        let mut z = zip((&mut a, &mut b));
        sort(&mut z);
        assert!(is_sorted(&z));
        assert_eq!(z.to_rows(), pairs);
    }

    #[test]
    fn test_quicksort_matches_sort() {
        let mut a = scrambled(257, 13);
        let mut b = scrambled(257, 5);
        let mut c = a.clone();
        let mut d = b.clone();

        quicksort(&mut zip((&mut a, &mut b)));
        sort(&mut zip((&mut c, &mut d)));
        assert_eq!(a, c);
        assert_eq!(b, d);
    }

    #[test]
    fn test_sort_by_first_field_only() {
        let mut keys = scrambled(100, 4);
        let mut vals: Vec<usize> = (0..100).collect();
        let mut z = zip((&mut keys, &mut vals));
        sort_by(&mut z, less_first);
        assert!(is_sorted_by(&z, less_first));
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        vals.sort_unstable();
        assert_eq!(vals, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_descending_with_closure() {
        let mut data = scrambled(64, 100);
        sort_by(&mut data, |a, b| a.get() > b.get());
        assert!(data.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_depth_limit_falls_back_to_heapsort() {
        let mut data = scrambled(200, 50);
        let mut expected = data.clone();
        expected.sort_unstable();
        let len = data.len();
        introsort(&mut data, 0, len, 0, &mut natural_less::<Vec<u32>>);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_all_equal_and_tiny_inputs() {
        let mut same = vec![7; 100];
        sort(&mut same);
        quicksort(&mut same);
        assert!(same.iter().all(|&x| x == 7));

        let mut empty: Vec<u8> = Vec::new();
        sort(&mut empty);
        quicksort(&mut empty);

        let mut two = vec![2, 1];
        quicksort(&mut two);
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn test_non_strict_predicate_still_sorts() {
        let mut data = scrambled(600, 6);
        sort_by(&mut data, |a, b| a.get() <= b.get());
        assert!(data.windows(2).all(|w| w[0] <= w[1]));

        let mut same = vec![3_u8; 300];
        sort_by(&mut same, |a, b| a.get() <= b.get());
        assert!(same.iter().all(|&x| x == 3));
    }

    #[test]
    fn test_sort_reversed_view_is_descending() {
        let mut data = scrambled(50, 9);
        sort(&mut (&mut data).reversed());
        assert!(data.windows(2).all(|w| w[0] >= w[1]));
    }
}
