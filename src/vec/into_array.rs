// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::mem::ManuallyDrop;

impl<T, const N: usize> StaticVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns
    /// [`Error::InvalidLen`] and drops the vector.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let v: StaticVec<u8, 2> = [1, 2].into();
    /// assert_eq!(v.try_into_array(), Ok([1, 2]));
    /// let short: StaticVec<u8, 2> = StaticVec::try_from(&[1][..]).unwrap();
    /// assert_eq!(short.try_into_array(), Err(Error::InvalidLen));
    /// ```
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }

        let this = ManuallyDrop::new(self);
        // SAFETY: `len == N`, so every slot is initialized and
        // `[MaybeUninit<T>; N]` has the layout of `[T; N]`. `this` is never
        // dropped, so ownership moves to the returned array.
        Ok(unsafe { this.buf.as_ptr().cast::<[T; N]>().read() })
    }
}
