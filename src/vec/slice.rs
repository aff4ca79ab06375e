// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Overwrites every live element with a clone of `value`; the length is unchanged.
    ///
    /// Same as `fill` on the slice.
    #[inline]
    pub fn assign(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Constructs from clones of at most `N` elements of `src`, truncating if necessary.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        let _ = v.extend_from_slice_truncated(src);
        v
    }
}
