// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test fixtures: elements that count their drops and clones that can fail.

// Imports
use alloc::rc::Rc;
use core::cell::Cell;

/// Shared drop counter.
pub(crate) fn drop_counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

/// An element that increments a shared counter when dropped.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub(crate) fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// An element whose `clone` panics once `fuse` clones have succeeded.
#[derive(Debug)]
pub(crate) struct Fused {
    pub(crate) id: u32,
    fuse: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl Fused {
    pub(crate) fn new(id: u32, fuse: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            fuse: Rc::clone(fuse),
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Fused {
    fn clone(&self) -> Self {
        let left = self.fuse.get();
        if left == 0 {
            panic!("clone fuse blown");
        }
        self.fuse.set(left - 1);
        Self::new(self.id, &self.fuse, &self.drops)
    }
}

impl Drop for Fused {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
