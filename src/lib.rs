// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-stack-vec`
//!
//! A `no_std`, fixed-capacity, inline vector for **any** element type.
//!
//! The core type, [`StaticVec<T, N>`], stores up to `N` elements inline (no
//! heap) and tracks a logical length `len ∈ 0..=N`. Elements may own
//! resources: each live element is dropped exactly once, whether it leaves
//! through `pop`, `remove`, `truncate`, `clear`, or the vector's own drop.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - You want predictable, allocation-free behavior and can work with a fixed
//!   maximum length.
//!
//! It may not be the best fit if you need very large capacities, or if you
//! frequently pass vectors by value (moving a `StaticVec` moves the whole
//! `N`-slot buffer, not just the live prefix).
//!
//! ## Element types
//!
//! Every bulk operation picks its strategy once per element type:
//!
//! - Types without drop glue (`!core::mem::needs_drop::<T>()`, e.g. integers
//!   and other `Copy` types) are retired by a length update alone.
//! - Everything else is dropped one element at a time with
//!   `ptr::drop_in_place`.
//!
//! Shifting elements is a bitwise move (`ptr::copy`, overlap-safe) for every
//! type. Duplicating elements goes through `Clone`.
//!
//! ## Zero capacity
//!
//! `StaticVec<T, 0>` is well-defined: every accessing or mutating operation
//! returns [`Error::OutOfRange`] without touching storage. The dedicated
//! [`EmptyStaticVec<T>`] type exposes the same behavior as a zero-sized type.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `StaticVec<T, N>` and
//!     `EmptyStaticVec<T>`. Deserializing more than `N` elements fails.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`StaticVec::<T, N>::CAPACITY == N`).
//! - Length is a logical prefix: only indices `< len` are considered initialized.
//! - No heap allocations are performed.
//! - Operations that may exceed capacity come in two flavors:
//!   - **Fallible**: return [`Error::CapacityExceeded`] and leave the vector
//!     unchanged (e.g. [`StaticVec::push`], [`StaticVec::insert`],
//!     [`StaticVec::insert_n`], [`StaticVec::resize`],
//!     [`StaticVec::extend_from_slice`], [`TryFrom<&[T]>`],
//!     [`StaticVec::try_from_iter`], [`StaticVec::try_extend_from_iter`]).
//!   - **Truncating**: silently ignore extra elements (e.g.
//!     [`StaticVec::push_truncated`], [`StaticVec::extend_from_slice_truncated`],
//!     [`StaticVec::from_slice_truncated`], [`FromIterator<T>`], and
//!     [`Extend<T>`]).
//! - Checked positions ([`StaticVec::at`], [`StaticVec::remove`],
//!   [`StaticVec::remove_range`], [`StaticVec::pop`] on empty) return
//!   [`Error::OutOfRange`].
//!
//! ## Range and indexing behavior
//!
//! Indexing (`v[i]`, `v[start..end]`, …) and [`StaticVec::drain`] follow
//! slice and `Vec` semantics and **panic** on out-of-bounds or inverted
//! ranges. [`StaticVec::front`] / [`StaticVec::back`] panic on an empty
//! vector; [`StaticVec::first`] / [`StaticVec::last`] are the `Option` forms.
//!
//! ## Example
//!
//! ```rust
//! use static_stack_vec::{Error, StaticVec};
//!
//! let mut v: StaticVec<String, 4> = StaticVec::new();
//! v.push("a".to_string()).unwrap();
//! v.extend_from_slice(&["b".to_string(), "c".to_string()]).unwrap();
//! v.insert_n(0, 1, "z".to_string()).unwrap();
//! assert_eq!(v.as_slice(), &["z", "a", "b", "c"]);
//! assert_eq!(v.push("d".to_string()), Err(Error::CapacityExceeded));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod empty;
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use empty::EmptyStaticVec;
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{Drain, StaticVec, swap};
