// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Reuses the live prefix of `self`, cloning into it in place.
    fn clone_from(&mut self, source: &Self) {
        self.truncate(source.len);
        let (head, tail) = source.as_slice().split_at(self.len);
        self.as_mut_slice().clone_from_slice(head);
        self.extend(tail.iter().cloned());
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Clones the contents of a vector of any capacity into one of capacity `N`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `other.len() > N`.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let small: StaticVec<u8, 2> = [1, 2].into();
    /// let big = StaticVec::<u8, 8>::try_from_vec(&small).unwrap();
    /// assert_eq!(big.as_slice(), &[1, 2]);
    /// assert_eq!(StaticVec::<u8, 1>::try_from_vec(&small), Err(Error::CapacityExceeded));
    /// ```
    #[inline]
    pub fn try_from_vec<const M: usize>(other: &StaticVec<T, M>) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::try_from(other.as_slice())
    }

    /// Clones and converts each element of `other` into a vector of `T`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `other.len() > N`; no element is
    /// converted in that case.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::StaticVec;
    /// let bytes: StaticVec<u8, 3> = [1, 2, 3].into();
    /// let wide = StaticVec::<u32, 4>::try_from_vec_into(&bytes).unwrap();
    /// assert_eq!(wide.as_slice(), &[1u32, 2, 3]);
    /// ```
    #[inline]
    pub fn try_from_vec_into<U, const M: usize>(other: &StaticVec<U, M>) -> Result<Self, Error>
    where
        U: Clone + Into<T>,
    {
        if other.len() > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        v.extend(other.iter().cloned().map(Into::into));
        Ok(v)
    }
}
