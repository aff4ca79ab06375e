// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: returns [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfRange)
    }

    /// Checked mutable access: returns [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfRange)
    }

    /// Returns a reference to the element at `i` without bounds checking.
    ///
    /// Only a `debug_assert!` guards the index; use [`at`](Self::at) or
    /// indexing for checked access.
    ///
    /// # Safety
    ///
    /// `i < self.len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of range for length {}", self.len);
        // SAFETY: The caller guarantees `i < len`, so the slot is initialized.
        unsafe { self.buf.get_unchecked(i).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i < self.len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "index {i} out of range for length {}", self.len);
        // SAFETY: The caller guarantees `i < len`, so the slot is initialized.
        unsafe { self.buf.get_unchecked_mut(i).assume_init_mut() }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`first`](Self::first) for the
    /// `Option` form.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.first() {
            Some(x) => x,
            None => empty_access("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.first_mut() {
            Some(x) => x,
            None => empty_access("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`last`](Self::last) for the
    /// `Option` form.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(x) => x,
            None => empty_access("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_mut() {
            Some(x) => x,
            None => empty_access("back_mut"),
        }
    }
}

#[cold]
#[track_caller]
fn empty_access(op: &str) -> ! {
    panic!("StaticVec::{op} called on an empty vector ({})", Error::EMPTY_CONTAINER_MSG)
}

#[cfg(test)]
mod tests {
    use crate::{Error, vec::StaticVec};

    #[test]
    fn test_at_is_checked() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(2), Ok(&3));
        assert_eq!(v.at(3), Err(Error::OutOfRange));
        assert_eq!(v.at(100), Err(Error::OutOfRange));
        *v.at_mut(1).unwrap() = 20;
        assert_eq!(v.as_slice(), &[1, 20, 3]);
        assert_eq!(v.at_mut(3), Err(Error::OutOfRange));
    }

    #[test]
    fn test_front_and_back() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(*v.front(), 1);
        assert_eq!(*v.back(), 3);
        *v.front_mut() = 10;
        *v.back_mut() = 30;
        assert_eq!(v.as_slice(), &[10, 2, 30]);
    }

    #[test]
    #[should_panic(expected = "back called on an empty vector")]
    fn test_back_on_empty_panics() {
        let v: StaticVec<i32, 4> = StaticVec::new();
        let _ = v.back();
    }

    #[test]
    fn test_get_unchecked_within_bounds() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[4, 5][..]).unwrap();
        // SAFETY: both indices are below `len`.
        unsafe {
            assert_eq!(*v.get_unchecked(1), 5);
            *v.get_unchecked_mut(0) = 40;
        }
        assert_eq!(v.as_slice(), &[40, 5]);
    }

    #[test]
    fn test_first_and_last_mut() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();

        if let Some(first) = v.first_mut() {
            *first = 10;
        }
        if let Some(last) = v.last_mut() {
            *last = 30;
        }
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let mut empty: StaticVec<i32, 4> = StaticVec::default();
        assert!(empty.first_mut().is_none());
        assert!(empty.last_mut().is_none());
    }
}
