// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::IntoIter,
    raw,
    vec::{StaticVec, remove::checked_bounds},
};

// Core imports
use core::{fmt, iter::FusedIterator, ops::RangeBounds};

/// Owned iterator returned by [`StaticVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - The drained elements have already been moved out of the parent into a
///   scratch `StaticVec`; this wraps an `IntoIter` over it, so elements
///   left unyielded are dropped with the iterator.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut StaticVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Drain<'_, T, N> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Drains the specified range of elements and returns them as an iterator.
    ///
    /// Elements in `range` are moved out into a scratch buffer and yielded by
    /// value. The remainder of the vector is shifted left immediately, so
    /// leaking the iterator still leaves the vector consistent.
    ///
    /// This matches the behavior of `Vec::drain`.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::StaticVec;
    /// let mut v: StaticVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: StaticVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let Some((start, end)) = checked_bounds(&range, len) else {
            panic!("drain range bound overflows usize");
        };
        if start > end {
            panic!("drain range start > end: {start} > {end}");
        }
        if end > len {
            panic!("drain range end {end} exceeds length {len}");
        }

        let count = end - start;
        let mut tmp: StaticVec<T, N> = StaticVec::new();
        // SAFETY: `[start, end)` is live; it moves into `tmp`, and the tail
        // shift plus length update below retire the source slots.
        unsafe {
            raw::relocate(&self.buf, start, &mut tmp.buf, 0, count);
            raw::shift(&mut self.buf, end, start, len - end);
        }
        tmp.len = count;
        self.len = len - count;

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}
