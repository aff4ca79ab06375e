// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `v` at slot `len`.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full (the value is
    /// dropped), or [`Error::OutOfRange`] if `N == 0`.
    #[inline]
    pub fn push(&mut self, v: T) -> Result<(), Error> {
        Self::reject_degenerate()?;
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }

        self.buf[self.len].write(v);

        self.len += 1;
        Ok(())
    }

    /// Pushes `v` if not full; if at capacity, drops `v` and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, v: T) -> bool {
        if self.len == N {
            return false;
        }
        self.buf[self.len].write(v);
        self.len += 1;
        true
    }
}
