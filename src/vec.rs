// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector that stores up to `N` elements
//! inline in a `[MaybeUninit<T>; N]` buffer and tracks a logical length.
//! Methods generally mirror slice/vector semantics, with explicit capacity
//! checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values owned by the vector.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read or dropped as `T`.
// - Every method that runs user code (`Clone`, `Drop`, predicates, source
//   iterators) while the buffer is in an intermediate state holds a guard
//   that restores the invariants if that code panics.

mod access;
mod as_ptr;
mod clone;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;
mod swap;
mod try_from;
mod try_from_iter;

pub use drain::Drain;
pub use swap::swap;

// Crate imports
use crate::{error::Error, raw::Slots};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, inline vector.
///
/// `StaticVec<T, N>` stores its elements inline in a buffer of capacity `N`
/// and tracks a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`);
/// - the buffer is stored inline (typically on the stack);
/// - any `T` is accepted, and live elements are dropped exactly once;
/// - many methods mirror `Vec`/slice semantics where they make sense;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `StaticVec<T, N>` maintains a `[MaybeUninit<T>; N]` buffer and
/// a logical length `len` with `0 <= len <= N`. Only the prefix `buf[..len]`
/// is initialized and visible through safe APIs. Slots past `len` are never
/// read, dropped, or assumed zeroed. [`as_slice`](StaticVec::as_slice),
/// indexing and iteration are all restricted to the live prefix.
///
/// # Complexity characteristics
///
/// - The type size is roughly `N * size_of::<T>() + O(1)`.
/// - Moving a `StaticVec<T, N>` moves the entire backing buffer. This is
///   `O(N)` in the capacity, so you generally want to pass it by reference in
///   hot code.
/// - [`push`](StaticVec::push) / [`pop`](StaticVec::pop) are `O(1)`.
/// - [`insert`](StaticVec::insert) / [`remove`](StaticVec::remove) are `O(k)`
///   in the number of shifted elements.
/// - [`resize`](StaticVec::resize) is `O(|new_len - len|)`.
/// - [`swap`](crate::swap) is element-wise and `O(max(len))`: the storage is
///   inline, so there is no handle to exchange.
///
/// # Errors
///
/// Capacity-sensitive operations return [`Error::CapacityExceeded`] when the
/// result would not fit, and checked accessors return [`Error::OutOfRange`]
/// for positions outside `[0, len)`. Both are reported before anything is
/// modified, so a rejected call leaves the vector unchanged.
///
/// Multi-element insertions ([`insert_n`](StaticVec::insert_n),
/// [`insert_from_slice`](StaticVec::insert_from_slice),
/// [`insert_iter`](StaticVec::insert_iter), [`resize`](StaticVec::resize))
/// are all-or-nothing even when `Clone` or the source iterator panics
/// partway: the elements written so far are dropped and the tail is moved
/// back before the panic continues.
///
/// # Zero capacity
///
/// `StaticVec<T, 0>` has no slots at all. Every mutating or checked accessing
/// operation (`push`, `pop`, `insert*`, `remove*`, `resize`, `reserve`, `at`)
/// returns [`Error::OutOfRange`] without touching memory, and `clear` is a
/// no-op. `front`/`back` (and their `_mut` forms) panic here, whereas
/// [`EmptyStaticVec`](crate::EmptyStaticVec) returns `Err(OutOfRange)` for the
/// same calls. Generic code that may be instantiated with `N == 0` should use
/// `first()`/`last()` or [`EmptyStaticVec`](crate::EmptyStaticVec) instead.
///
/// # Examples
///
/// ```rust
/// use static_stack_vec::{Error, StaticVec};
///
/// let mut v: StaticVec<String, 3> = StaticVec::new();
/// v.push("a".to_string()).unwrap();
/// v.push("c".to_string()).unwrap();
/// v.insert(1, "b".to_string()).unwrap();
/// assert_eq!(v.as_slice(), &["a", "b", "c"]);
///
/// assert_eq!(v.push("d".to_string()), Err(Error::CapacityExceeded));
/// assert_eq!(v.len(), 3);
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can reach (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    ///
    /// A zero-capacity vector is always full.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Fails with [`Error::OutOfRange`] for the zero-capacity instantiation.
    ///
    /// `N` is a constant, so this folds away for every other capacity.
    #[inline(always)]
    pub(crate) const fn reject_degenerate() -> Result<(), Error> {
        if N == 0 {
            Err(Error::OutOfRange)
        } else {
            Ok(())
        }
    }

    /// Checks that `n` elements fit, without changing anything.
    ///
    /// Returns [`Error::CapacityExceeded`] if `n > N`, and
    /// [`Error::OutOfRange`] for a zero-capacity vector.
    #[inline]
    pub fn reserve(&self, n: usize) -> Result<(), Error> {
        Self::reject_degenerate()?;
        if n > N {
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    ///
    /// Reverse traversal is `v.iter().rev()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `buf[..len]` is the initialized prefix and `len` is already
        // zero, so nothing can observe those slots again.
        unsafe { Slots::<T>::destroy(&mut self.buf, 0, len) }
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Drops every live element, front to back, and sets `len = 0`.
    ///
    /// A no-op on a zero-capacity vector.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks to `new_len` if `new_len < len`, dropping the trailing
    /// elements; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first: if a destructor panics, the dropped tail is already
        // outside the live prefix.
        self.len = new_len;
        // SAFETY: `buf[new_len..len]` was part of the initialized prefix and
        // is no longer reachable through `len`.
        unsafe { Slots::<T>::destroy(&mut self.buf, new_len, len - new_len) }
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
