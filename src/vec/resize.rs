// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::iter;

impl<T, const N: usize> StaticVec<T, N> {
    /// Resizes to `new_len`, appending clones of `value` when growing and
    /// dropping the trailing elements when shrinking.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N` and
    /// [`Error::OutOfRange`] if `N == 0`; the vector is unchanged in both
    /// cases. Growing is all-or-nothing if `Clone` panics.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        Self::reject_degenerate()?;
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }
        self.insert_iter(len, iter::repeat_n(value, new_len - len))
    }

    /// Like [`resize`](Self::resize), but fills new slots with `T::default()`.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let mut v: StaticVec<String, 3> = StaticVec::new();
    /// v.resize_default(2).unwrap();
    /// assert_eq!(v.as_slice(), &["", ""]);
    /// assert_eq!(v.resize_default(4), Err(Error::CapacityExceeded));
    /// ```
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        Self::reject_degenerate()?;
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }
        self.insert_iter(len, (0..new_len - len).map(|_| T::default()))
    }

    /// Constructs a vector holding `n` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `n > N`.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let v: StaticVec<String, 4> = StaticVec::from_elem("hi".to_string(), 3).unwrap();
    /// assert_eq!(v.as_slice(), &["hi", "hi", "hi"]);
    /// assert_eq!(StaticVec::<u8, 2>::from_elem(0, 3), Err(Error::CapacityExceeded));
    /// ```
    #[inline]
    pub fn from_elem(value: T, n: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        if n > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        v.extend(iter::repeat_n(value, n));
        Ok(v)
    }
}
