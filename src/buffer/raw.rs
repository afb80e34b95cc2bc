//! `RawBuffer` - a growable ring buffer with manual element lifetime management.
//!
//! The buffer owns a block of `MaybeUninit` slots whose length is always zero or a
//! power of two. Live elements occupy the circular window `front..back`, taken
//! modulo the capacity; every other slot is uninitialized.
//!
//! The buffer never becomes completely full: it grows as soon as an insert would
//! leave fewer than one free slot, so `front == back` always means "empty".
//!
//! Storage management is split into three primitives that the rest of the type
//! builds on:
//! - `allocate` hands out a block of uninitialized slots,
//! - `move_window_into` relocates the live window into another block,
//! - `destroy` drops a run of live elements in place.
//!
//! The wraparound case, where a run straddles the physical end of the block, is
//! handled once in `runs` and reused by all three.

use core::fmt;
use core::mem::MaybeUninit;
use core::ops::Range;
use core::ptr;

use crate::capacity::{buffer_capacity, grown_capacity, is_power_of_two};
use crate::contract::{check_remove_count, Violation};

/// Allocates `capacity` uninitialized slots.
fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    debug_assert!(capacity == 0 || is_power_of_two(capacity));
    let mut slots = Vec::with_capacity(capacity);
    // SAFETY: `MaybeUninit` does not require initialization.
    unsafe { slots.set_len(capacity) };
    slots.into_boxed_slice()
}

/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline(always)]
unsafe fn assume_init<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    &*(slots as *const [MaybeUninit<T>] as *const [T])
}

/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline(always)]
unsafe fn assume_init_mut<T>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slots as *mut [MaybeUninit<T>] as *mut [T])
}

/// A contiguous block of element slots used as a circular buffer.
pub struct RawBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
    /// Slot of the first live element.
    front: usize,
    /// Slot one past the last live element.
    back: usize,
}

impl<T> RawBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self {
            slots: allocate(0),
            front: 0,
            back: 0,
        }
    }

    /// Creates an empty buffer with room for at least `minimum` slots.
    ///
    /// The capacity is rounded up to a power of two, with a minimum of two
    /// once any capacity is requested.
    pub fn with_capacity(minimum: usize) -> Self {
        Self {
            slots: allocate(buffer_capacity(minimum)),
            front: 0,
            back: 0,
        }
    }

    /// Number of allocated slots. Always zero or a power of two.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.back.wrapping_sub(self.front) & self.mask()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Returns `true` if the live window does not wrap around the end of the block.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.front <= self.back
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.capacity().wrapping_sub(1)
    }

    #[inline(always)]
    fn wrap(&self, index: usize) -> usize {
        index & self.mask()
    }

    /// Physical slot ranges covering `len` slots starting at slot `start`,
    /// in logical order. The second range is empty unless the run wraps.
    fn runs(&self, start: usize, len: usize) -> (Range<usize>, Range<usize>) {
        let capacity = self.capacity();
        debug_assert!(len <= capacity && (start < capacity || capacity == 0));
        let head = capacity - start;
        if len <= head {
            (start..start + len, 0..0)
        } else {
            (start..capacity, 0..len - head)
        }
    }

    /// Physical ranges of the live window.
    #[inline]
    fn window(&self) -> (Range<usize>, Range<usize>) {
        self.runs(self.front, self.len())
    }

    /// Drops `len` elements starting at slot `start`.
    ///
    /// # Safety
    ///
    /// The run must consist of live elements, and the cursors must already have
    /// been moved past it so a panicking destructor cannot cause a double drop.
    unsafe fn destroy(&mut self, start: usize, len: usize) {
        let (head, tail) = self.runs(start, len);
        for run in [head, tail] {
            ptr::drop_in_place(assume_init_mut(&mut self.slots[run]));
        }
    }

    /// Bitwise-moves the live window into `target`, compacted to `0..len`.
    ///
    /// # Safety
    ///
    /// `target` must hold at least `self.len()` slots. Afterwards the source
    /// slots must be treated as uninitialized.
    unsafe fn move_window_into(&self, target: &mut [MaybeUninit<T>]) {
        debug_assert!(target.len() >= self.len());
        let (head, tail) = self.window();
        let src = self.slots.as_ptr();
        let dst = target.as_mut_ptr();
        ptr::copy_nonoverlapping(src.add(head.start), dst, head.len());
        ptr::copy_nonoverlapping(src.add(tail.start), dst.add(head.len()), tail.len());
    }

    /// Ensures the capacity is at least `minimum`.
    ///
    /// Growing moves the live elements into a new block compacted to slot
    /// zero; the old block is released without dropping anything.
    pub fn reserve(&mut self, minimum: usize) {
        if minimum <= self.capacity() {
            return;
        }
        let len = self.len();
        let mut slots = allocate(buffer_capacity(minimum));
        // SAFETY: the new block is larger than the current one, which holds
        // more slots than live elements. The old slots are discarded below.
        unsafe { self.move_window_into(&mut slots) };
        self.slots = slots;
        self.front = 0;
        self.back = len;
    }

    /// Doubles the block when inserting one more element would fill it.
    #[inline]
    fn grow_for_insert(&mut self) {
        let capacity = self.capacity();
        if capacity <= self.len() + 1 {
            let grown = grown_capacity(capacity);
            _trace!(from = capacity, to = grown, "growing ring buffer");
            self.reserve(grown);
        }
    }

    /// Inserts `value` after the last element.
    pub fn append(&mut self, value: T) {
        self.grow_for_insert();
        self.slots[self.back].write(value);
        self.back = self.wrap(self.back + 1);
    }

    /// Inserts `value` before the first element.
    pub fn prepend(&mut self, value: T) {
        self.grow_for_insert();
        self.front = self.wrap(self.front.wrapping_sub(1));
        self.slots[self.front].write(value);
    }

    /// Moves the first element out, or returns `None` if empty.
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.front;
        self.front = self.wrap(slot + 1);
        // SAFETY: `slot` held the first live element and is no longer covered
        // by the window.
        Some(unsafe { self.slots[slot].assume_init_read() })
    }

    /// Moves the last element out, or returns `None` if empty.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back = self.wrap(self.back.wrapping_sub(1));
        // SAFETY: the old `back - 1` held the last live element and is no
        // longer covered by the window.
        Some(unsafe { self.slots[self.back].assume_init_read() })
    }

    /// Drops the first `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    #[track_caller]
    pub fn remove_first_n(&mut self, n: usize) {
        check_remove_count(n, self.len());
        if n == 0 {
            return;
        }
        let start = self.front;
        self.front = self.wrap(start + n);
        // SAFETY: `start..start + n` were live and are now outside the window.
        unsafe { self.destroy(start, n) };
    }

    /// Drops the last `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    #[track_caller]
    pub fn remove_last_n(&mut self, n: usize) {
        check_remove_count(n, self.len());
        if n == 0 {
            return;
        }
        self.back = self.wrap(self.back.wrapping_sub(n));
        let start = self.back;
        // SAFETY: the `n` slots from the new back were live and are now
        // outside the window.
        unsafe { self.destroy(start, n) };
    }

    /// Drops every element.
    ///
    /// With `keep_capacity` the block is retained and the cursors reset to
    /// slot zero; otherwise the block is released and the capacity becomes 0.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        let (start, len) = (self.front, self.len());
        self.front = 0;
        self.back = 0;
        // SAFETY: the whole window was live and the cursors now describe an
        // empty buffer.
        unsafe { self.destroy(start, len) };
        if !keep_capacity {
            self.slots = allocate(0);
        }
    }

    /// Rearranges the storage so the live window is one contiguous run, and
    /// returns it.
    ///
    /// A wrapped window is rotated so the first element lands in slot zero;
    /// an already contiguous window is left where it is.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if !self.is_contiguous() {
            let len = self.len();
            // Rotating uninitialized slots along with live ones is harmless:
            // the whole block is `MaybeUninit`.
            self.slots.rotate_left(self.front);
            self.front = 0;
            self.back = len;
        }
        let window = self.front..self.back;
        // SAFETY: the window is contiguous and live.
        unsafe { assume_init_mut(&mut self.slots[window]) }
    }

    /// The live window as two runs in logical order.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head, tail) = self.window();
        // SAFETY: both runs lie inside the live window.
        unsafe { (assume_init(&self.slots[head]), assume_init(&self.slots[tail])) }
    }

    /// The live window as two mutable runs in logical order.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (head, tail) = self.window();
        // `tail`, when non-empty, always sits below `head`.
        let (low, high) = self.slots.split_at_mut(head.start);
        let head_len = head.len();
        // SAFETY: both runs lie inside the live window.
        unsafe { (assume_init_mut(&mut high[..head_len]), assume_init_mut(&mut low[tail])) }
    }

    /// Returns the element at logical position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.wrap(self.front + index);
        // SAFETY: `index < len`, so the slot is inside the window.
        Some(unsafe { self.slots[slot].assume_init_ref() })
    }

    /// Returns the element at logical position `index` mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.wrap(self.front + index);
        // SAFETY: `index < len`, so the slot is inside the window.
        Some(unsafe { self.slots[slot].assume_init_mut() })
    }

    /// Checks the structural invariants. Used by tests.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let capacity = self.capacity();
        assert!(capacity == 0 || is_power_of_two(capacity), "capacity {capacity} is not a power of two");
        if capacity > 0 {
            assert!(capacity > self.len(), "buffer is full");
            assert!(self.front < capacity && self.back < capacity);
        } else {
            assert_eq!((self.front, self.back), (0, 0));
        }
    }
}

impl<T: Clone> Clone for RawBuffer<T> {
    /// Duplicates the buffer with the same capacity, laying the copied
    /// elements out from slot zero.
    fn clone(&self) -> Self {
        let mut copy = Self {
            slots: allocate(self.capacity()),
            front: 0,
            back: 0,
        };
        let (head, tail) = self.as_slices();
        for value in head.iter().chain(tail) {
            // `back` counts the elements written so far; a panicking clone
            // leaves `copy` holding exactly those.
            copy.slots[copy.back].write(value.clone());
            copy.back += 1;
        }
        copy
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let (start, len) = (self.front, self.len());
        self.front = 0;
        self.back = 0;
        // SAFETY: the window was live and is now empty.
        unsafe { self.destroy(start, len) };
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.as_slices();
        f.debug_list().entries(head.iter().chain(tail)).finish()
    }
}

impl<T> RawBuffer<T> {
    /// Like [`remove_first`](Self::remove_first) but treats an empty buffer as
    /// a contract violation.
    #[track_caller]
    pub fn take_first(&mut self) -> T {
        match self.remove_first() {
            Some(value) => value,
            None => crate::contract::violated(Violation::Empty),
        }
    }

    /// Like [`remove_last`](Self::remove_last) but treats an empty buffer as
    /// a contract violation.
    #[track_caller]
    pub fn take_last(&mut self) -> T {
        match self.remove_last() {
            Some(value) => value,
            None => crate::contract::violated(Violation::Empty),
        }
    }
}
