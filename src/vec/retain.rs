// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    raw::{self, Slots},
    vec::StaticVec,
};

impl<T, const N: usize> StaticVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element once, in order. Rejected
    /// elements are dropped as they are visited. If `f` or a destructor
    /// panics, the elements not yet visited are kept and the vector stays
    /// contiguous.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        self.len = 0;
        let mut g = Compactor {
            vec: self,
            read: 0,
            write: 0,
            len,
        };

        while g.read < g.len {
            // SAFETY: `read < len`, so the slot holds a live element that the
            // compactor owns until it is kept or dropped.
            let keep = f(unsafe { g.vec.buf[g.read].assume_init_ref() });
            let read = g.read;
            g.read += 1;
            if keep {
                // SAFETY: `write <= read`; the element moves down to the
                // compacted prefix.
                unsafe { raw::shift(&mut g.vec.buf, read, g.write, 1) };
                g.write += 1;
            } else {
                // SAFETY: The element is live and `read` has already moved
                // past it, so it is never visited again.
                unsafe { Slots::<T>::destroy(&mut g.vec.buf, read, 1) };
            }
        }
    }
}

/// Compacts kept elements toward the front. On drop (normal exit or
/// unwind), slides the unvisited suffix down and sets the final length.
struct Compactor<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T, const N: usize> Drop for Compactor<'_, T, N> {
    fn drop(&mut self) {
        let rest = self.len - self.read;
        // SAFETY: `[read, len)` is unvisited and live; `[write, read)` is vacant.
        unsafe { raw::shift(&mut self.vec.buf, self.read, self.write, rest) };
        self.vec.len = self.write + rest;
    }
}
