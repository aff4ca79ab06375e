// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Code that dereferences
    /// this pointer must treat `self.len()` as the number of initialized
    /// elements and never read from `ptr.add(i)` for any `i >= self.len()`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Same contract as [`as_ptr`](Self::as_ptr). Writing past `len` is
    /// allowed from Rust's point of view, but it does **not** update `len`,
    /// and such values are neither visible nor dropped by the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}
