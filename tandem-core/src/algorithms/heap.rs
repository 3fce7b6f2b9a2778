//! Binary max-heap operations over a sequence.
//!
//! Row 0 is the root and the children of row `i` are rows `2i + 1` and
//! `2i + 2`. "Max" is with respect to the predicate: no child is `less`-greater
//! than its parent.

use crate::adapters::cursor::Cursor;
use crate::algorithms::compare::{holds_at, natural_less};
use crate::foundation::sequence::{OrdRows, Sequence, SequenceMut};

// ============================================================================
// Sifting
// ============================================================================

/// Restores the heap property below `root` in the `len`-row heap stored at
/// `base..base + len`.
fn sift_down<S, F>(seq: &mut S, base: usize, mut root: usize, len: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            break;
        }
        if child + 1 < len && holds_at(seq, less, base + child, base + child + 1) {
            child += 1;
        }
        if !holds_at(seq, less, base + root, base + child) {
            break;
        }
        seq.swap_rows(base + root, base + child);
        root = child;
    }
}

fn sift_up<S, F>(seq: &mut S, mut child: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    while child > 0 {
        let parent = (child - 1) / 2;
        if !holds_at(seq, less, parent, child) {
            break;
        }
        seq.swap_rows(parent, child);
        child = parent;
    }
}

fn heapify<S, F>(seq: &mut S, base: usize, len: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    for root in (0..len / 2).rev() {
        sift_down(seq, base, root, len, less);
    }
}

/// Heapsorts rows `lo..hi`. Used as the introsort fallback.
pub(crate) fn heapsort_range<S, F>(seq: &mut S, lo: usize, hi: usize, less: &mut F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let len = hi - lo;
    heapify(seq, lo, len, less);
    for end in (1..len).rev() {
        seq.swap_rows(lo, lo + end);
        sift_down(seq, lo, 0, end, less);
    }
}

// ============================================================================
// Public operations
// ============================================================================

/// Arranges the rows into a max-heap under natural ordering.
pub fn make_heap<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S) {
    make_heap_by(seq, natural_less::<S>);
}

/// Arranges the rows into a max-heap under `less`.
pub fn make_heap_by<S, F>(seq: &mut S, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    let len = seq.len();
    heapify(seq, 0, len, &mut less);
}

/// Adds row `end - 1` to the heap occupying rows `0..end - 1`.
///
/// # Panics
///
/// Panics if `end` is zero or greater than the sequence length.
pub fn push_heap<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S, end: usize) {
    push_heap_by(seq, end, natural_less::<S>);
}

/// [`push_heap`] under `less`.
///
/// # Panics
///
/// Panics if `end` is zero or greater than the sequence length.
pub fn push_heap_by<S, F>(seq: &mut S, end: usize, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    assert!(
        end > 0 && end <= seq.len(),
        "heap end {end} outside 1..={}",
        seq.len()
    );
    sift_up(seq, end - 1, &mut less);
}

/// Moves the greatest row of the heap `0..end` to `end - 1` and re-heaps
/// `0..end - 1`.
///
/// # Panics
///
/// Panics if `end` is greater than the sequence length.
pub fn pop_heap<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S, end: usize) {
    pop_heap_by(seq, end, natural_less::<S>);
}

/// [`pop_heap`] under `less`.
///
/// # Panics
///
/// Panics if `end` is greater than the sequence length.
pub fn pop_heap_by<S, F>(seq: &mut S, end: usize, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    assert!(end <= seq.len(), "heap end {end} past {}", seq.len());
    if end < 2 {
        return;
    }
    seq.swap_rows(0, end - 1);
    sift_down(seq, 0, 0, end - 1, &mut less);
}

/// Turns a max-heap into ascending order.
pub fn sort_heap<S: SequenceMut + OrdRows + ?Sized>(seq: &mut S) {
    sort_heap_by(seq, natural_less::<S>);
}

/// [`sort_heap`] under `less`.
pub fn sort_heap_by<S, F>(seq: &mut S, mut less: F)
where
    S: SequenceMut + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    for end in (2..=seq.len()).rev() {
        pop_heap_by(seq, end, &mut less);
    }
}

/// Whether the rows form a max-heap under natural ordering.
pub fn is_heap<S: OrdRows + ?Sized>(seq: &S) -> bool {
    is_heap_by(seq, natural_less::<S>)
}

/// Whether the rows form a max-heap under `less`.
pub fn is_heap_by<S, F>(seq: &S, mut less: F) -> bool
where
    S: Sequence + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    (1..seq.len()).all(|child| !holds_at(seq, &mut less, (child - 1) / 2, child))
}
