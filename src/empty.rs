// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The zero-capacity container, [`EmptyStaticVec`].
//!
//! A distinct, zero-sized type with the same surface as
//! [`StaticVec`](crate::StaticVec) where every operation is decided without
//! any storage: mutations and checked accesses fail with
//! [`Error::OutOfRange`], queries report an empty and full container, and
//! indexing panics with [`Error::EMPTY_CONTAINER_MSG`].

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut, RangeBounds},
};

/// A container of capacity zero.
///
/// # Examples
///
/// ```rust
/// use static_stack_vec::{EmptyStaticVec, Error};
///
/// let mut v: EmptyStaticVec<String> = EmptyStaticVec::new();
/// assert!(v.is_empty() && v.is_full());
/// assert_eq!(v.push("x".to_string()), Err(Error::OutOfRange));
/// assert_eq!(v.at(0), Err(Error::OutOfRange));
/// assert_eq!(v.iter().count(), 0);
/// ```
pub struct EmptyStaticVec<T> {
    _marker: PhantomData<T>,
}

impl<T> EmptyStaticVec<T> {
    /// The fixed capacity, always zero.
    pub const CAPACITY: usize = 0;

    /// Creates the (only) empty container.
    #[inline]
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }

    /// Always `0`.
    #[inline]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always `0`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        0
    }

    /// Always `0`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        0
    }

    /// Always `true`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always `true`: there is no room for an element.
    #[inline]
    pub const fn is_full(&self) -> bool {
        true
    }

    /// Always `0`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        0
    }

    /// Always fails; `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        drop(value);
        Err(Error::OutOfRange)
    }

    /// Always fails.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails; `value` is dropped.
    #[inline]
    pub fn insert(&mut self, _index: usize, value: T) -> Result<(), Error> {
        drop(value);
        Err(Error::OutOfRange)
    }

    /// Always fails, whatever `n` is.
    #[inline]
    pub fn insert_n(&mut self, _index: usize, _n: usize, _value: T) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails, even for an empty `src`.
    #[inline]
    pub fn insert_from_slice(&mut self, _index: usize, _src: &[T]) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails without pulling from `iter`.
    #[inline]
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, _index: usize, _iter: I) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails.
    #[inline]
    pub fn remove(&mut self, _index: usize) -> Result<T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails, even for an empty range.
    #[inline]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, _range: R) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails, including `resize(0, _)`.
    #[inline]
    pub fn resize(&mut self, _new_len: usize, _value: T) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails, including `reserve(0)`.
    #[inline]
    pub fn reserve(&self, _n: usize) -> Result<(), Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails.
    #[inline]
    pub fn at(&self, _i: usize) -> Result<&T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails.
    #[inline]
    pub fn at_mut(&mut self, _i: usize) -> Result<&mut T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails: there is no first element.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always fails: there is no last element.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        Err(Error::OutOfRange)
    }

    /// Always `None`.
    #[inline]
    pub fn get(&self, _i: usize) -> Option<&T> {
        None
    }

    /// No-op.
    #[inline]
    pub fn clear(&mut self) {}

    /// No-op: two empty containers have nothing to exchange.
    #[inline]
    pub fn swap_with(&mut self, _other: &mut Self) {}

    /// The empty slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &[]
    }

    /// The empty slice, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut []
    }

    /// An iterator that yields nothing.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// A mutable iterator that yields nothing.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for EmptyStaticVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyStaticVec<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for EmptyStaticVec<T> {}

impl<T> fmt::Debug for EmptyStaticVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyStaticVec")
    }
}

impl<T> PartialEq for EmptyStaticVec<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
impl<T> Eq for EmptyStaticVec<T> {}
impl<T> PartialOrd for EmptyStaticVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for EmptyStaticVec<T> {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}
impl<T: Hash> Hash for EmptyStaticVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Index<usize> for EmptyStaticVec<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, _i: usize) -> &T {
        panic!("{}", Error::EMPTY_CONTAINER_MSG)
    }
}
impl<T> IndexMut<usize> for EmptyStaticVec<T> {
    #[track_caller]
    fn index_mut(&mut self, _i: usize) -> &mut T {
        panic!("{}", Error::EMPTY_CONTAINER_MSG)
    }
}

impl<'a, T> IntoIterator for &'a EmptyStaticVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<StaticVec<T, 0>> for EmptyStaticVec<T> {
    #[inline]
    fn from(_: StaticVec<T, 0>) -> Self {
        Self::new()
    }
}
impl<T> From<EmptyStaticVec<T>> for StaticVec<T, 0> {
    #[inline]
    fn from(_: EmptyStaticVec<T>) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::EmptyStaticVec;
    use crate::{
        Error, StaticVec,
        testing::{Tracked, drop_counter},
    };
    use alloc::{format, string::String};
    use core::cmp::Ordering;

    #[test]
    fn test_queries() {
        let v: EmptyStaticVec<u8> = EmptyStaticVec::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.max_size(), 0);
        assert_eq!(v.spare_capacity(), 0);
        assert!(v.is_empty() && v.is_full());
    }

    const _: () = {
        let v = EmptyStaticVec::<u8>::new();
        assert!(EmptyStaticVec::<u8>::CAPACITY == 0);
        assert!(v.is_empty() && v.is_full());
        assert!(core::mem::size_of::<EmptyStaticVec<[u64; 32]>>() == 0);
    };

    #[test]
    fn test_every_mutation_and_access_is_out_of_range() {
        let mut v: EmptyStaticVec<i32> = EmptyStaticVec::new();
        assert_eq!(v.push(1), Err(Error::OutOfRange));
        assert_eq!(v.pop(), Err(Error::OutOfRange));
        assert_eq!(v.insert(0, 1), Err(Error::OutOfRange));
        assert_eq!(v.insert_n(0, 0, 1), Err(Error::OutOfRange));
        assert_eq!(v.insert_from_slice(0, &[]), Err(Error::OutOfRange));
        assert_eq!(v.insert_iter(0, [1, 2]), Err(Error::OutOfRange));
        assert_eq!(v.remove(0), Err(Error::OutOfRange));
        assert_eq!(v.remove_range(..), Err(Error::OutOfRange));
        assert_eq!(v.resize(0, 1), Err(Error::OutOfRange));
        assert_eq!(v.reserve(0), Err(Error::OutOfRange));
        assert_eq!(v.at(0), Err(Error::OutOfRange));
        assert_eq!(v.at_mut(0), Err(Error::OutOfRange));
        assert_eq!(v.front(), Err(Error::OutOfRange));
        assert_eq!(v.back(), Err(Error::OutOfRange));
        assert_eq!(v.get(0), None);

        v.clear();
        let mut w = EmptyStaticVec::new();
        v.swap_with(&mut w);
        assert!(v.is_empty() && w.is_empty());
        assert_eq!(v.iter().next(), None);
        assert_eq!(v.iter_mut().next(), None);
        assert_eq!((&v).into_iter().count(), 0);
    }

    #[test]
    fn test_error_message() {
        let v: EmptyStaticVec<i32> = EmptyStaticVec::new();
        let err = v.at(3).unwrap_err();
        assert_eq!(format!("{err}"), "index out of range");
        assert_eq!(Error::EMPTY_CONTAINER_MSG, "attempt to access element of an empty container");
    }

    #[test]
    fn test_rejected_values_are_dropped() {
        let drops = drop_counter();
        let mut v: EmptyStaticVec<Tracked> = EmptyStaticVec::new();
        let _ = v.push(Tracked::new(1, &drops));
        let _ = v.insert(0, Tracked::new(2, &drops));
        let _ = v.resize(4, Tracked::new(3, &drops));
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_comparisons_and_hash() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: EmptyStaticVec<String> = EmptyStaticVec::new();
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert!(a <= b);
        assert!(a >= b);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        StaticVec::<String, 3>::new().hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
        assert_eq!(format!("{a:?}"), "EmptyStaticVec");
    }

    #[test]
    fn test_conversions_with_zero_capacity_static_vec() {
        let sv: StaticVec<u8, 0> = StaticVec::new();
        let e: EmptyStaticVec<u8> = sv.into();
        let back: StaticVec<u8, 0> = e.into();
        assert!(back.is_empty());
    }

    #[test]
    #[should_panic(expected = "attempt to access element of an empty container")]
    fn test_index_panics() {
        let v: EmptyStaticVec<u8> = EmptyStaticVec::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic(expected = "attempt to access element of an empty container")]
    fn test_index_mut_panics() {
        let mut v: EmptyStaticVec<u8> = EmptyStaticVec::new();
        v[0] = 1;
    }
}
