// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec` and `EmptyStaticVec`.
//!
//! These errors represent capacity and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`StaticVec`](crate::StaticVec) and
/// [`EmptyStaticVec`](crate::EmptyStaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would make the length exceed the fixed capacity (`N`).
    ///
    /// Always reported before any element is touched.
    CapacityExceeded,
    /// An index, position or range was outside the live elements `[0, len)`.
    ///
    /// Also returned by every accessing or mutating operation of a
    /// zero-capacity vector.
    OutOfRange,
    /// An operation required `len == N`, which was not met.
    ///
    /// Currently used by [`StaticVec::try_into_array`](crate::StaticVec::try_into_array).
    InvalidLen,
}

impl Error {
    /// Panic message used when a zero-capacity vector is indexed.
    pub const EMPTY_CONTAINER_MSG: &'static str = "attempt to access element of an empty container";
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::OutOfRange => f.write_str("index out of range"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(Error::CapacityExceeded.to_string(), "capacity exceeded");
        assert_eq!(Error::OutOfRange.to_string(), "index out of range");
        assert_eq!(Error::InvalidLen.to_string(), "invalid length");
    }
}
