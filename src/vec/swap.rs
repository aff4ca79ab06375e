// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw, vec::StaticVec};

// Core imports
use core::mem;

impl<T, const N: usize> StaticVec<T, N> {
    /// Exchanges the contents of `self` and `other` element by element.
    ///
    /// The common prefix is swapped in place and the surplus of the longer
    /// vector is moved across. No element is cloned or dropped. Cost is
    /// `O(max(len))`, not `O(1)`: the storage is inline.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        let (a, b) = (self.len, other.len);
        let common = a.min(b);
        self.as_mut_slice()[..common].swap_with_slice(&mut other.as_mut_slice()[..common]);

        // SAFETY: The longer vector's `[common, max)` slots are live and
        // move into the shorter vector's vacant `[common, max)` slots; the
        // length swap below retires the sources.
        if a > b {
            unsafe { raw::relocate(&self.buf, common, &mut other.buf, common, a - common) };
        } else if b > a {
            unsafe { raw::relocate(&other.buf, common, &mut self.buf, common, b - common) };
        }
        mem::swap(&mut self.len, &mut other.len);
    }
}

/// Exchanges the contents of two vectors of equal capacity, element by element.
///
/// Equivalent to [`StaticVec::swap_with`]. Zero-capacity vectors have nothing
/// to exchange.
///
/// # Examples
/// ```
/// # use static_stack_vec::{StaticVec, swap};
/// let mut a: StaticVec<u8, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
/// let mut b: StaticVec<u8, 4> = StaticVec::try_from(&[9][..]).unwrap();
/// swap(&mut a, &mut b);
/// assert_eq!(a.as_slice(), &[9]);
/// assert_eq!(b.as_slice(), &[1, 2, 3]);
/// ```
#[inline]
pub fn swap<T, const N: usize>(a: &mut StaticVec<T, N>, b: &mut StaticVec<T, N>) {
    a.swap_with(b);
}
