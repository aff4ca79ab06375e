// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    /// Takes ownership of a full array; the result has `len == N`.
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self {
            buf: arr.map(MaybeUninit::new),
            len: N,
        }
    }
}
