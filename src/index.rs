// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! Any index a slice accepts (`usize` and every range form) works on a
//! `StaticVec`, restricted to the live prefix `[0..len)`. Out-of-bounds and
//! inverted ranges panic exactly as they do on slices. A zero-capacity
//! vector panics with [`Error::EMPTY_CONTAINER_MSG`] instead.

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

#[cold]
#[track_caller]
fn degenerate_index() -> ! {
    panic!("{}", Error::EMPTY_CONTAINER_MSG)
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        if N == 0 {
            degenerate_index();
        }
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        if N == 0 {
            degenerate_index();
        }
        &mut self.as_mut_slice()[index]
    }
}
