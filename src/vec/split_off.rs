// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`.
    ///
    /// Returns [`Error::OutOfRange`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfRange);
        }

        let mut other = Self::new();
        self.len = at;
        // SAFETY: `[at, len)` was initialized and is retired from `self` by
        // the length update above.
        unsafe { raw::relocate(&self.buf, at, &mut other.buf, 0, len - at) };
        other.len = len - at;

        Ok(other)
    }
}
