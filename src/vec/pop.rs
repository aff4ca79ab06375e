// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes the last element and returns it.
    ///
    /// Returns [`Error::OutOfRange`] if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::OutOfRange);
        }
        self.len -= 1;
        // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
        // initialized by invariant, so `buf[self.len]` (the old last slot)
        // still holds a `T`; it is now outside the live prefix and read once.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, vec::StaticVec};
    use alloc::string::String;

    #[test]
    fn test_pop_moves_owned_values_out() {
        let mut v: StaticVec<String, 3> = StaticVec::new();
        v.push(String::from("first")).unwrap();
        v.push(String::from("second")).unwrap();
        assert_eq!(v.pop().as_deref(), Ok("second"));
        assert_eq!(v.len(), 1);
        assert_eq!(v.pop().as_deref(), Ok("first"));
        assert_eq!(v.pop(), Err(Error::OutOfRange));
        assert!(v.is_empty());
    }

    #[test]
    fn test_add_remove_cycle() {
        let mut v: StaticVec<usize, 5> = StaticVec::new();
        v.extend(0..5);
        v.clear();
        assert_eq!(v.len(), 0);
        v.push(20).unwrap();
        assert_eq!(v.len(), 1);
        v.pop().unwrap();
        assert_eq!(v.len(), 0);
        v.push(20).unwrap();
        v.push(30).unwrap();
        assert_eq!(v[1], 30);
        assert_eq!(v[0], 20);
        v.pop().unwrap();
        v.pop().unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.pop(), Err(Error::OutOfRange));
    }
}
