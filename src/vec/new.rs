// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector.
    ///
    /// No element is constructed; the backing slots stay uninitialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
