// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{self, Slots},
    vec::StaticVec,
};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange);
        }
        let len = self.len;

        // SAFETY: `index < len`, so `buf[index]` is within the initialized
        // prefix; its slot is overwritten by the shift below.
        let out = unsafe { self.buf[index].assume_init_read() };

        // Shift left: [index+1..len) -> [index..len-1)
        // SAFETY: Slot `len - 1` is retired by the length update.
        unsafe { raw::shift(&mut self.buf, index + 1, index, len - index - 1) };

        self.len = len - 1;
        Ok(out)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns [`Error::OutOfRange`] when
    /// `index >= len`. Removing the last element avoids the move.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange);
        }
        self.len -= 1;
        let last = self.len;

        // SAFETY: Before the decrement `index < old_len`, so `buf[index]` is
        // initialized; it is read once and then overwritten or retired.
        let out = unsafe { self.buf[index].assume_init_read() };

        if index != last {
            // SAFETY: `buf[last]` was live and is retired by the length update.
            unsafe { raw::shift(&mut self.buf, last, index, 1) };
        }

        Ok(out)
    }

    /// Drops the elements in `range` and shifts the remainder left.
    ///
    /// Returns [`Error::OutOfRange`] if the range is inverted, ends past
    /// `len`, or `N == 0`. An empty range is a no-op. The tail is moved into
    /// place even if one of the dropped elements panics.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let mut v: StaticVec<_, 6> = StaticVec::try_from(&[0, 1, 2, 3, 4][..]).unwrap();
    /// v.remove_range(1..3).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 3, 4]);
    /// assert_eq!(v.remove_range(2..4), Err(Error::OutOfRange));
    /// ```
    pub fn remove_range<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        Self::reject_degenerate()?;
        let len = self.len;
        let (start, end) = checked_bounds(&range, len).ok_or(Error::OutOfRange)?;
        if start > end || end > len {
            return Err(Error::OutOfRange);
        }
        if start == end {
            return Ok(());
        }

        let closer = TailCloser {
            vec: self,
            src: end,
            dst: start,
            tail: len - end,
        };
        closer.vec.len = start;
        // SAFETY: `[start, end)` is initialized and no longer reachable through
        // `len`; the closer moves the tail down afterwards.
        unsafe { Slots::<T>::destroy(&mut closer.vec.buf, start, end - start) };
        Ok(())
    }
}

/// Resolves `range` against `len` without overflowing.
pub(crate) fn checked_bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> Option<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1)?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    Some((start, end))
}

/// Moves a tail of `tail` slots from `src` down to `dst` when dropped, and
/// makes them live again.
struct TailCloser<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    src: usize,
    dst: usize,
    tail: usize,
}

impl<T, const N: usize> Drop for TailCloser<'_, T, N> {
    fn drop(&mut self) {
        // SAFETY: `[src, src + tail)` holds the live tail; `[dst, src)` was
        // emptied by the caller.
        unsafe { raw::shift(&mut self.vec.buf, self.src, self.dst, self.tail) };
        self.vec.len = self.dst + self.tail;
    }
}
