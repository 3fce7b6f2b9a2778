//! Random-access positions into a sequence.
//!
//! A [`Cursor`] is a shared borrow of a sequence plus a row index. It supports
//! the full random-access arithmetic (offset, difference, ordering) and
//! dereferences to the sequence's row proxy. Two cursors compare by position
//! only; comparing cursors of different sequences is meaningless but not
//! checked.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::foundation::{
    error::Result,
    sequence::{Sequence, SequenceExt},
};

/// A position inside a sequence.
pub struct Cursor<'s, S: ?Sized> {
    seq: &'s S,
    pos: usize,
}

impl<S: ?Sized> Clone for Cursor<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Cursor<'_, S> {}

impl<S: ?Sized> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

impl<'s, S: ?Sized> Cursor<'s, S> {
    /// Creates a cursor at row `pos` of `seq`.
    #[inline]
    pub const fn new(seq: &'s S, pos: usize) -> Self {
        Self { seq, pos }
    }

    /// Row index the cursor points at.
    #[inline]
    pub const fn index(&self) -> usize {
        self.pos
    }

    /// The sequence the cursor walks.
    #[inline]
    pub const fn sequence(&self) -> &'s S {
        self.seq
    }

    /// Moves one row forward.
    #[inline]
    pub fn step(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }

    /// Moves one row back.
    #[inline]
    pub fn step_back(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }
}

impl<'s, S: Sequence + ?Sized> Cursor<'s, S> {
    /// Row proxy under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not inside `0..len`.
    #[inline]
    pub fn get(&self) -> S::Ref<'s> {
        self.seq.row(self.pos)
    }

    /// Row proxy `offset` rows away from the cursor.
    #[inline]
    pub fn at(&self, offset: isize) -> S::Ref<'s> {
        (*self + offset).get()
    }

    /// Row proxy under the cursor, or an error when it is out of range.
    #[inline]
    pub fn try_get(&self) -> Result<S::Ref<'s>> {
        self.seq.try_row(self.pos)
    }

    /// Whether the cursor sits at (or past) the end of its sequence.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.seq.len()
    }
}

impl<S: ?Sized> Add<isize> for Cursor<'_, S> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: isize) -> Self {
        self += rhs;
        self
    }
}

impl<S: ?Sized> Sub<isize> for Cursor<'_, S> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: isize) -> Self {
        self -= rhs;
        self
    }
}

impl<S: ?Sized> AddAssign<isize> for Cursor<'_, S> {
    #[inline]
    fn add_assign(&mut self, rhs: isize) {
        self.pos = self.pos.wrapping_add_signed(rhs);
    }
}

impl<S: ?Sized> SubAssign<isize> for Cursor<'_, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: isize) {
        self.pos = self.pos.wrapping_add_signed(rhs.wrapping_neg());
    }
}

impl<'s, S: ?Sized> Sub for Cursor<'s, S> {
    type Output = isize;

    /// Signed number of rows from `rhs` to `self`.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Self) -> isize {
        self.pos.wrapping_sub(rhs.pos) as isize
    }
}

impl<S: ?Sized> PartialEq for Cursor<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for Cursor<'_, S> {}

impl<S: ?Sized> PartialOrd for Cursor<'_, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: ?Sized> Ord for Cursor<'_, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (*self - *other).cmp(&0)
    }
}
