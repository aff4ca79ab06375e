// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{self, Slots},
    vec::StaticVec,
};

// Core imports
use core::{iter, mem};

impl<T, const N: usize> StaticVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len` (or `N == 0`).
    /// - Returns [`Error::CapacityExceeded`] if at capacity.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        Self::reject_degenerate()?;
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len;

        // Shift right: [index..len) -> [index+1..len+1)
        // SAFETY: `len < N`, so the destination fits; slot `index` is
        // overwritten right after.
        unsafe { raw::shift(&mut self.buf, index, index + 1, len - index) };
        self.buf[index].write(value);

        self.len = len + 1;
        Ok(())
    }

    /// Inserts `n` clones of `value` at `index`.
    ///
    /// Errors as [`insert_iter`](Self::insert_iter).
    #[inline]
    pub fn insert_n(&mut self, index: usize, n: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_iter(index, iter::repeat_n(value, n))
    }

    /// Inserts clones of every element of `src` at `index`, in order.
    ///
    /// Errors as [`insert_iter`](Self::insert_iter).
    #[inline]
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_iter(index, src.iter().cloned())
    }

    /// Inserts the items of an exact-size iterator at `index`, in order.
    ///
    /// The tail `[index, len)` is shifted right by `iter.len()` once, then the
    /// gap is filled front to back.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len` (or `N == 0`).
    /// - Returns [`Error::CapacityExceeded`] if `len + iter.len() > N`.
    ///
    /// Both checks run before the iterator is touched. If the iterator (or a
    /// `Clone` it performs) panics, the items inserted so far are dropped and
    /// the vector is restored to its previous contents. If it yields fewer
    /// items than it reported, only those are inserted; extra items are
    /// never pulled.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::StaticVec;
    /// let mut v: StaticVec<u8, 6> = [1, 5].into_iter().collect();
    /// v.insert_iter(1, 2..5).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::reject_degenerate()?;
        let iter = iter.into_iter();
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange);
        }
        let count = iter.len();
        if count > N - len {
            return Err(Error::CapacityExceeded);
        }
        if count == 0 {
            return Ok(());
        }

        let mut gap = Gap::open(self, index, count);
        for item in iter.take(count) {
            gap.fill(item);
        }
        gap.close();
        Ok(())
    }
}

/// A hole of `count` slots opened at `index` by shifting the tail right.
///
/// While the gap is open the vector's `len` is pinned at `index`, so the
/// tail is out of reach of the vector's own drop. Dropping an unclosed gap
/// (unwinding out of a fill) drops what was written and moves the tail back.
struct Gap<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    index: usize,
    count: usize,
    tail: usize,
    written: usize,
}

impl<'a, T, const N: usize> Gap<'a, T, N> {
    fn open(vec: &'a mut StaticVec<T, N>, index: usize, count: usize) -> Self {
        let tail = vec.len - index;
        // SAFETY: The caller checked `len + count <= N`. Slots
        // `[index, index + count)` become the gap and are treated as
        // uninitialized until filled.
        unsafe { raw::shift(&mut vec.buf, index, index + count, tail) };
        vec.len = index;
        Self {
            vec,
            index,
            count,
            tail,
            written: 0,
        }
    }

    #[inline]
    fn fill(&mut self, item: T) {
        debug_assert!(self.written < self.count);
        self.vec.buf[self.index + self.written].write(item);
        self.written += 1;
    }

    /// Commits the written items; a partially filled gap is closed up.
    fn close(self) {
        let mut this = mem::ManuallyDrop::new(self);
        let (index, count, tail, written) = (this.index, this.count, this.tail, this.written);
        if written < count {
            // SAFETY: Moves the tail down onto the unfilled part of the gap.
            unsafe { raw::shift(&mut this.vec.buf, index + count, index + written, tail) };
        }
        this.vec.len = index + written + tail;
    }
}

impl<T, const N: usize> Drop for Gap<'_, T, N> {
    fn drop(&mut self) {
        // SAFETY: `[index, index + written)` holds the items written so far,
        // which are discarded; the tail then moves back to `index`, restoring
        // the layout from before `open`.
        unsafe {
            Slots::<T>::destroy(&mut self.vec.buf, self.index, self.written);
            raw::shift(&mut self.vec.buf, self.index + self.count, self.index, self.tail);
        }
        self.vec.len = self.index + self.tail;
    }
}
