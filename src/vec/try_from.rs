// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns
    /// [`Error::CapacityExceeded`] if `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        if src.len() > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        v.extend(src.iter().cloned());
        Ok(v)
    }
}

impl<T: Clone, const N: usize, const M: usize> TryFrom<&[T; M]> for StaticVec<T, N> {
    type Error = Error;

    fn try_from(src: &[T; M]) -> Result<Self, Self::Error> {
        Self::try_from(&src[..])
    }
}
