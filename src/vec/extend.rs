// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::StaticVec};

/// Appends items until the vector is full; the rest of the iterator is
/// left unconsumed.
impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends clones of `src` if they all fit.
    ///
    /// Returns [`Error::CapacityExceeded`] (vector unchanged) otherwise, and
    /// [`Error::OutOfRange`] for a zero-capacity vector.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_from_slice(self.len, src)
    }

    /// Clones as many elements from `src` as will fit and returns the count appended.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = self.spare_capacity().min(src.len());
        self.extend(src[..take].iter().cloned());
        take
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more, this returns `Err(Error::CapacityExceeded)` and
    ///     `self` is left unchanged; the items pulled so far are dropped.
    /// - The source iterator may be partially consumed on error.
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let spare = self.spare_capacity();

        // Stage into a scratch buffer so `self` is untouched on error.
        let mut tmp: StaticVec<T, N> = StaticVec::new();
        for item in iter {
            if tmp.len == spare {
                return Err(Error::CapacityExceeded);
            }
            tmp.buf[tmp.len].write(item);
            tmp.len += 1;
        }

        let count = tmp.len;
        tmp.len = 0;
        // SAFETY: `tmp[..count]` is initialized and retired by zeroing its
        // length; `count <= spare` so the destination fits.
        unsafe { raw::relocate(&tmp.buf, 0, &mut self.buf, self.len, count) };
        self.len += count;
        Ok(())
    }
}
