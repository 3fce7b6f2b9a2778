//! Row comparators.
//!
//! Every algorithm takes its predicate as
//! `for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool`. The functions here
//! are plain generic functions of that shape, so they can be passed by name:
//!
//! ```
//! use tandem_core::prelude::*;
//!
//! let mut keys = vec![2, 1, 2, 1];
//! let mut tags = vec!['a', 'b', 'c', 'd'];
//! let mut rows = zip((&mut keys, &mut tags));
//!
//! sort_by(&mut rows, less_first);
//! assert!(is_sorted_by(&rows, less_first));
//! ```

use core::cmp::Ordering;

use crate::adapters::{cursor::Cursor, zip::Head};
use crate::foundation::sequence::{OrdRows, Sequence};

/// Natural "less than": lexicographic over every zipped field.
#[inline]
pub fn natural_less<'s, S: OrdRows + ?Sized>(a: Cursor<'s, S>, b: Cursor<'s, S>) -> bool {
    S::cmp_refs(&a.get(), &b.get()) == Ordering::Less
}

/// Natural equality over every zipped field.
#[inline]
pub fn natural_eq<'s, S: OrdRows + ?Sized>(a: Cursor<'s, S>, b: Cursor<'s, S>) -> bool {
    S::eq_refs(&a.get(), &b.get())
}

/// Compares rows by their first field only.
///
/// For a nested zip the first field is the inner zip, which compares
/// lexicographically in turn.
#[inline]
pub fn less_first<'s, S>(a: Cursor<'s, S>, b: Cursor<'s, S>) -> bool
where
    S: Head + ?Sized,
    S::Head: OrdRows,
{
    let lhs = a.sequence().head().row(a.index());
    let rhs = b.sequence().head().row(b.index());
    <S::Head as OrdRows>::cmp_refs(&lhs, &rhs) == Ordering::Less
}

/// Tests rows for equality of their first field only.
#[inline]
pub fn eq_first<'s, S>(a: Cursor<'s, S>, b: Cursor<'s, S>) -> bool
where
    S: Head + ?Sized,
    S::Head: OrdRows,
{
    let lhs = a.sequence().head().row(a.index());
    let rhs = b.sequence().head().row(b.index());
    <S::Head as OrdRows>::eq_refs(&lhs, &rhs)
}

/// Applies a cursor predicate to rows `a` and `b` of `seq`.
#[inline]
pub(crate) fn holds_at<S, F>(seq: &S, pred: &mut F, a: usize, b: usize) -> bool
where
    S: Sequence + ?Sized,
    F: for<'s> FnMut(Cursor<'s, S>, Cursor<'s, S>) -> bool,
{
    pred(Cursor::new(seq, a), Cursor::new(seq, b))
}
