//! Binary-heap algorithms over flat slices.
//!
//! The heap is stored in the usual 0-based array layout: the children of slot
//! `i` are `2i + 1` and `2i + 2`. For a [`Comparator`] `c` the heap property is
//! that no child must come before its parent, i.e. `!c.is_ordered(child, parent)`
//! for every parent/child pair. The front of the heap (slot 0) is therefore the
//! element that comes first under `c`.
//!
//! Both repair walks lift the displaced element into a [`Hole`] and shift the
//! visited elements one level instead of swapping pairwise; the held element is
//! written exactly once, at its final slot. If the comparator panics midway the
//! hole is refilled on unwind and the slice stays a permutation of its input.

mod comparator;

pub use comparator::{Ascending, Comparator, Descending};

use core::mem::ManuallyDrop;
use core::ptr;

/// A slot whose element has been lifted out, plus that element.
struct Hole<'a, T> {
    data: &'a mut [T],
    element: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Lifts the element at `pos` out of `data`.
    ///
    /// # Safety
    ///
    /// `pos` must be inside `data`.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        let element = ptr::read(data.get_unchecked(pos));
        Hole {
            data,
            element: ManuallyDrop::new(element),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn element(&self) -> &T {
        &self.element
    }

    /// # Safety
    ///
    /// `index` must be inside the slice and differ from the hole position.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos && index < self.data.len());
        self.data.get_unchecked(index)
    }

    /// Moves the element at `index` into the hole; the hole moves to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be inside the slice and differ from the hole position.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos && index < self.data.len());
        let base = self.data.as_mut_ptr();
        ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1);
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `pos` is inside the slice and its slot is vacant.
        unsafe {
            let slot = self.data.as_mut_ptr().add(self.pos);
            ptr::copy_nonoverlapping(&*self.element, slot, 1);
        }
    }
}

/// Moves the element at `pos` toward the root until its parent comes before
/// it. Returns the final position.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
pub fn sift_up<T, C: Comparator<T> + ?Sized>(data: &mut [T], pos: usize, order: &C) -> usize {
    assert!(pos < data.len(), "sift position {pos} out of bounds");
    // SAFETY: checked above.
    let mut hole = unsafe { Hole::new(data, pos) };

    while hole.pos() > 0 {
        let parent = (hole.pos() - 1) / 2;
        // SAFETY: parent < hole.pos(), so it is in bounds and not the hole.
        if order.is_ordered(unsafe { hole.get(parent) }, hole.element()) {
            break;
        }
        // SAFETY: as above.
        unsafe { hole.move_to(parent) };
    }

    hole.pos()
}

/// Moves the element at `pos` toward the leaves until no child has to come
/// before it.
///
/// Of two children the right one is followed unless the left one strictly
/// comes first.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
pub fn sift_down<T, C: Comparator<T> + ?Sized>(data: &mut [T], pos: usize, order: &C) {
    let len = data.len();
    assert!(pos < len, "sift position {pos} out of bounds");
    // SAFETY: checked above.
    let mut hole = unsafe { Hole::new(data, pos) };

    loop {
        let left = 2 * hole.pos() + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        // SAFETY: children are past the hole and checked against `len`.
        let child = if right < len && !order.is_ordered(unsafe { hole.get(left) }, unsafe { hole.get(right) }) {
            right
        } else {
            left
        };
        // SAFETY: as above.
        if !order.is_ordered(unsafe { hole.get(child) }, hole.element()) {
            break;
        }
        // SAFETY: as above.
        unsafe { hole.move_to(child) };
    }
}

/// Rearranges `data` into a heap in linear time.
pub fn heapify<T, C: Comparator<T> + ?Sized>(data: &mut [T], order: &C) {
    for parent in (0..data.len() / 2).rev() {
        sift_down(data, parent, order);
    }
}

/// Returns `true` if `data` satisfies the heap property under `order`.
pub fn is_heap<T, C: Comparator<T> + ?Sized>(data: &[T], order: &C) -> bool {
    (1..data.len()).all(|child| !order.is_ordered(&data[child], &data[(child - 1) / 2]))
}
