// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Collects an iterator, failing if it yields more than `N` items.
    ///
    /// On error the collected items are dropped and the iterator has been
    /// consumed up to and including the first item that did not fit.
    ///
    /// # Examples
    /// ```
    /// # use static_stack_vec::{Error, StaticVec};
    /// let v = StaticVec::<u8, 3>::try_from_iter(1..=3).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(StaticVec::<u8, 3>::try_from_iter(1..=4), Err(Error::CapacityExceeded));
    /// ```
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            if v.len == N {
                return Err(Error::CapacityExceeded);
            }
            v.buf[v.len].write(item);
            v.len += 1;
        }
        Ok(v)
    }
}

/// Collects at most `N` items; anything beyond capacity is not pulled.
impl<T, const N: usize> FromIterator<T> for StaticVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, vec::StaticVec};

    #[test]
    fn test_try_from_iter_exact_fit() {
        let v = StaticVec::<i32, 4>::try_from_iter([1, 2, 3, 4]).unwrap();
        assert!(v.is_full());
        assert_eq!(StaticVec::<i32, 0>::try_from_iter([]).map(|v| v.len()), Ok(0));
        assert_eq!(StaticVec::<i32, 0>::try_from_iter([1]), Err(Error::CapacityExceeded));
    }

    #[test]
    fn test_collect_truncates() {
        let v: StaticVec<u32, 3> = (0..100).collect();
        assert_eq!(v.as_slice(), &[0, 1, 2]);
    }
}
