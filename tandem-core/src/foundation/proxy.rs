//! Row proxy semantics.
//!
//! A row proxy is a tuple of references into the zipped parts. These traits
//! give proxies the three behaviors in-place algorithms rely on:
//!
//! - [`Snapshot`]: copy the addressed row out into an owned tuple;
//! - [`Assign`]: write an owned row back through a mutable proxy;
//! - [`SwapWith`]: exchange two rows element-wise.
//!
//! All three recurse through nested tuples, so a zip of zips behaves like a
//! flat one.

/// Copies the referenced row into an owned value.
pub trait Snapshot {
    /// Owned counterpart of the proxy.
    type Owned;

    /// Returns an owned copy of the referenced row.
    fn snapshot(&self) -> Self::Owned;
}

/// Writes through a mutable proxy.
pub trait Assign<V> {
    /// Overwrites every referenced element with the matching field of `value`.
    fn assign(self, value: V);

    /// Overwrites the referenced row with a copy of `source`.
    fn assign_from<R>(self, source: &R)
    where
        Self: Sized,
        R: Snapshot<Owned = V>,
    {
        self.assign(source.snapshot());
    }
}

/// Element-wise exchange of two mutable proxies of the same shape.
pub trait SwapWith {
    /// Swaps every referenced element with its counterpart in `other`.
    fn swap_with(self, other: Self);
}

impl<T: Clone> Snapshot for &T {
    type Owned = T;

    #[inline]
    fn snapshot(&self) -> T {
        T::clone(self)
    }
}

impl<T: Clone> Snapshot for &mut T {
    type Owned = T;

    #[inline]
    fn snapshot(&self) -> T {
        T::clone(self)
    }
}

impl<T> Assign<T> for &mut T {
    #[inline]
    fn assign(self, value: T) {
        *self = value;
    }
}

impl<T> SwapWith for &mut T {
    #[inline]
    fn swap_with(self, other: Self) {
        core::mem::swap(self, other);
    }
}

macro_rules! impl_tuple_proxy {
    ($($P:ident $V:ident $idx:tt),+) => {
        impl<$($P: Snapshot),+> Snapshot for ($($P,)+) {
            type Owned = ($(<$P as Snapshot>::Owned,)+);

            #[inline]
            fn snapshot(&self) -> Self::Owned {
                ($(self.$idx.snapshot(),)+)
            }
        }

        impl<$($P, $V),+> Assign<($($V,)+)> for ($($P,)+)
        where
            $($P: Assign<$V>,)+
        {
            #[inline]
            fn assign(self, value: ($($V,)+)) {
                $(self.$idx.assign(value.$idx);)+
            }
        }

        impl<$($P: SwapWith),+> SwapWith for ($($P,)+) {
            #[inline]
            fn swap_with(self, other: Self) {
                $(self.$idx.swap_with(other.$idx);)+
            }
        }
    };
}

impl_tuple_proxy!(A VA 0, B VB 1);
impl_tuple_proxy!(A VA 0, B VB 1, C VC 2);
impl_tuple_proxy!(A VA 0, B VB 1, C VC 2, D VD 3);
impl_tuple_proxy!(A VA 0, B VB 1, C VC 2, D VD 3, E VE 4);
impl_tuple_proxy!(A VA 0, B VB 1, C VC 2, D VD 3, E VE 4, F VF 5);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_snapshot_pair() {
        let a = 1;
        let b = "x".to_string();
        let proxy = (&a, &b);
        assert_eq!(proxy.snapshot(), (1, "x".to_string()));
    }

    #[test]
    fn test_assign_nested() {
        let (mut a, mut b, mut c) = (0, 0, String::new());
        ((&mut a, &mut b), &mut c).assign(((1, 2), "z".to_string()));
        assert_eq!((a, b, c.as_str()), (1, 2, "z"));
    }

    #[test]
    fn test_assign_from_other_proxy() {
        let (mut a, mut b) = (0, 0);
        let (x, y) = (7, 8);
        (&mut a, &mut b).assign_from(&(&x, &y));
        assert_eq!((a, b), (7, 8));
    }

    #[test]
    fn test_swap_with() {
        let (mut a0, mut b0) = (1, 'a');
        let (mut a1, mut b1) = (2, 'b');
        (&mut a0, &mut b0).swap_with((&mut a1, &mut b1));
        assert_eq!((a0, b0, a1, b1), (2, 'b', 1, 'a'));
    }
}
