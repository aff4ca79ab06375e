// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with the iterator.
//! - `&StaticVec` and `&mut StaticVec` iterate as slices.

// Crate imports
use crate::{raw::Slots, vec::StaticVec};

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `StaticVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is kept at zero: the iterator owns `[front, back)` itself.
    pub(crate) v: StaticVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(mut v: StaticVec<T, N>) -> Self {
        let back = v.len;
        v.len = 0;
        Self { v, front: 0, back }
    }

    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is initialized and owned by the iterator.
        unsafe {
            core::slice::from_raw_parts(
                self.v.buf.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }

    /// Moves the value out of slot `i`, which the caller has just retired.
    #[inline]
    fn read_slot(&mut self, i: usize) -> T {
        // SAFETY: Callers pass an index from `[front, back)` and then move
        // `front`/`back` past it, so each slot is read exactly once.
        unsafe { self.v.buf[i].assume_init_read() }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.read_slot(i))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let start = self.front;
        self.front += skip;
        // SAFETY: The skipped slots were live and `front` has moved past them.
        unsafe { Slots::<T>::destroy(&mut self.v.buf, start, skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.read_slot(self.back))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        self.back -= skip;
        // SAFETY: The skipped slots were live and `back` has moved before them.
        unsafe { Slots::<T>::destroy(&mut self.v.buf, self.back, skip) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front, back)` holds the unyielded elements.
        unsafe { Slots::<T>::destroy(&mut self.v.buf, front, back - front) }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        Self::new(self.as_slice().iter().cloned().collect())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StaticVec;
    use crate::testing::{Tracked, drop_counter};
    use alloc::{format, string::String, vec::Vec};

    #[test]
    fn test_double_ended_and_nth() {
        let v: StaticVec<i32, 6> = StaticVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v: StaticVec<i32, 6> = StaticVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 4, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_len_tracks_both_ends() {
        let v: StaticVec<char, 8> = "stack".chars().collect();
        let mut it = v.into_iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next_back(), Some('k'));
        assert_eq!(it.nth(1), Some('t'));
        assert_eq!(it.len(), 2);
        assert_eq!(it.as_slice(), &['a', 'c']);
        assert_eq!(it.nth_back(1), Some('a'));
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth_back_past_end_drains() {
        let v: StaticVec<i32, 5> = StaticVec::try_from(&[10, 20, 30][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(3), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_zero_sized_type_and_zero_capacity() {
        let v: StaticVec<(), 3> = StaticVec::from([(); 3]);
        assert_eq!(v.into_iter().count(), 3);

        let empty: StaticVec<u8, 0> = StaticVec::default();
        let mut it = empty.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_drops_each_element_once() {
        let drops = drop_counter();
        let v: StaticVec<Tracked, 6> = (0..6).map(|id| Tracked::new(id, &drops)).collect();
        let mut it = v.into_iter();
        let first = it.next().unwrap();
        assert_eq!(it.nth(1).map(|t| t.id), Some(2)); // drops 1 and 2
        assert_eq!(drops.get(), 2);
        assert_eq!(it.nth_back(1).map(|t| t.id), Some(4)); // drops 5 and 4
        assert_eq!(drops.get(), 4);
        drop(it); // drops 3
        assert_eq!(drops.get(), 5);
        drop(first);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_by_ref_iteration_and_clone() {
        let mut v: StaticVec<String, 3> = StaticVec::new();
        v.push(String::from("a")).unwrap();
        v.push(String::from("b")).unwrap();
        for s in &mut v {
            s.push('!');
        }
        let seen: Vec<&str> = (&v).into_iter().map(String::as_str).collect();
        assert_eq!(seen, ["a!", "b!"]);

        let mut it = v.into_iter();
        it.next();
        let cloned = it.clone();
        assert_eq!(cloned.as_slice(), &["b!"]);
        assert_eq!(format!("{it:?}"), r#"IntoIter(["b!"])"#);
    }
}
