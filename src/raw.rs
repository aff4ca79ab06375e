// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot primitives shared by every [`StaticVec`](crate::StaticVec) operation.
//!
//! Two concerns live here:
//!
//! - **Destruction**, dispatched once per element type on
//!   [`Slots::TRIVIAL`]. For types without drop glue the length update alone
//!   retires the slots. Everything else gets one `drop_in_place` per element.
//! - **Relocation**, through [`shift`]. Moving a value in Rust is a bitwise
//!   copy for every type, so a single `ptr::copy` serves trivial and
//!   non-trivial element types alike.

// Core imports
use core::{
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr,
};

/// Compile-time capabilities of an element type `T`.
pub(crate) struct Slots<T>(PhantomData<T>);

impl<T> Slots<T> {
    /// `true` when dropping a `T` has no observable side effects.
    pub(crate) const TRIVIAL: bool = !mem::needs_drop::<T>();

    /// Drops `count` live elements starting at slot `start`.
    ///
    /// If one destructor panics, the remaining elements are still dropped
    /// (the `drop_in_place` slice contract).
    ///
    /// `drop_in_place` is already a no-op for types without drop glue; the
    /// `TRIVIAL` early return only makes that dispatch explicit.
    ///
    /// # Safety
    ///
    /// Slots `[start, start + count)` must hold initialized values that are
    /// never read as `T` again.
    #[inline]
    pub(crate) unsafe fn destroy(buf: &mut [MaybeUninit<T>], start: usize, count: usize) {
        if Self::TRIVIAL || count == 0 {
            return;
        }
        debug_assert!(start + count <= buf.len());
        // SAFETY: In bounds by the assertion above; the caller guarantees the
        // slots are initialized and retired after this call.
        unsafe {
            let first = buf.as_mut_ptr().add(start).cast::<T>();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, count));
        }
    }
}

/// Moves `count` slots starting at `src` so they start at `dst`, inside one
/// buffer.
///
/// Source and destination may overlap in either direction: `ptr::copy` reads
/// the whole source before it is clobbered, which is what a right shift
/// (highest index first) and a left shift (lowest index first) both need.
///
/// # Safety
///
/// After the call the values live at `[dst, dst + count)`. Any source slot
/// outside that range holds a stale bitwise duplicate and must be treated as
/// uninitialized.
#[inline]
pub(crate) unsafe fn shift<T>(buf: &mut [MaybeUninit<T>], src: usize, dst: usize, count: usize) {
    debug_assert!(src + count <= buf.len());
    debug_assert!(dst + count <= buf.len());
    if count == 0 || src == dst {
        return;
    }
    let base = buf.as_mut_ptr();
    // SAFETY: Both ranges are within `buf` (asserted above) and `ptr::copy`
    // tolerates overlap.
    unsafe { ptr::copy(base.add(src), base.add(dst), count) }
}

/// Moves `count` slots from `src[from..]` into `dst[to..]`, across buffers.
///
/// # Safety
///
/// Same ownership contract as [`shift`]: the source slots are retired.
#[inline]
pub(crate) unsafe fn relocate<T>(
    src: &[MaybeUninit<T>],
    from: usize,
    dst: &mut [MaybeUninit<T>],
    to: usize,
    count: usize,
) {
    debug_assert!(from + count <= src.len());
    debug_assert!(to + count <= dst.len());
    // SAFETY: Distinct borrows cannot overlap; bounds asserted above.
    unsafe { ptr::copy_nonoverlapping(src.as_ptr().add(from), dst.as_mut_ptr().add(to), count) }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{Slots, shift};
    use alloc::rc::Rc;
    use core::mem::MaybeUninit;

    #[test]
    fn test_trivial_dispatch() {
        assert!(Slots::<u32>::TRIVIAL);
        assert!(Slots::<(u8, [u16; 4])>::TRIVIAL);
        assert!(!Slots::<Rc<u8>>::TRIVIAL);
        assert!(!Slots::<alloc::string::String>::TRIVIAL);
    }

    #[test]
    fn test_shift_right_overlapping() {
        let mut buf: [MaybeUninit<u8>; 6] = [MaybeUninit::new(0); 6];
        for (i, slot) in buf.iter_mut().enumerate().take(4) {
            slot.write(i as u8 + 1);
        }
        // [1, 2, 3, 4, _, _] -> move [1..4) to [3..6)
        unsafe { shift(&mut buf, 1, 3, 3) };
        let tail: [u8; 3] = unsafe { [buf[3].assume_init(), buf[4].assume_init(), buf[5].assume_init()] };
        assert_eq!(tail, [2, 3, 4]);
        assert_eq!(unsafe { buf[0].assume_init() }, 1);
    }

    #[test]
    fn test_shift_left_overlapping() {
        let mut buf: [MaybeUninit<u8>; 5] = [MaybeUninit::new(0); 5];
        for (i, slot) in buf.iter_mut().enumerate() {
            slot.write(i as u8 * 10);
        }
        // [0, 10, 20, 30, 40] -> move [2..5) to [0..3)
        unsafe { shift(&mut buf, 2, 0, 3) };
        let head: [u8; 3] = unsafe { [buf[0].assume_init(), buf[1].assume_init(), buf[2].assume_init()] };
        assert_eq!(head, [20, 30, 40]);
    }

    #[test]
    fn test_destroy_runs_each_destructor_once() {
        let marker = Rc::new(());
        let mut buf: [MaybeUninit<Rc<()>>; 4] = [const { MaybeUninit::uninit() }; 4];
        for slot in buf.iter_mut().take(3) {
            slot.write(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 4);
        unsafe { Slots::destroy(&mut buf, 1, 2) };
        assert_eq!(Rc::strong_count(&marker), 2);
        unsafe { Slots::destroy(&mut buf, 0, 1) };
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_destroy_trivial_and_empty_ranges_touch_nothing() {
        let mut words: [MaybeUninit<u32>; 3] = [MaybeUninit::new(7); 3];
        unsafe { Slots::destroy(&mut words, 0, 3) };
        assert_eq!(unsafe { words[2].assume_init() }, 7);

        let marker = Rc::new(());
        let mut buf: [MaybeUninit<Rc<()>>; 2] = [const { MaybeUninit::uninit() }; 2];
        buf[0].write(Rc::clone(&marker));
        unsafe { Slots::destroy(&mut buf, 1, 0) };
        assert_eq!(Rc::strong_count(&marker), 2);
        unsafe { Slots::destroy(&mut buf, 0, 1) };
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}
