//! # `cyclic` - Copy-on-Write Ring Buffer Collections
//!
//! Value-semantics collections built on one power-of-two circular buffer.
//!
//! ## Layers
//!
//! 1. **[`RawBuffer`]**: an owned ring of `capacity` slots with `front`/`back`
//!    cursors. Capacity is always zero or a power of two, so wrapping an index
//!    is a single mask. O(1) amortized insertion and removal at both ends.
//! 2. **[`Deque`]**: a handle to a shared `RawBuffer`. Clones share storage
//!    until one of them mutates, at which point that handle forks its own copy.
//! 3. **[`heap`]**: sift-up / sift-down / heapify over flat slices, driven by a
//!    caller-supplied [`Comparator`].
//! 4. **Collections**: [`PriorityQueue`] (a heap kept in a `Deque`), the
//!    [`Stack`] and [`Queue`] façades, and an arena-backed [`LinkedList`].
//!
//! ## Contract violations
//!
//! Misuse (removing from an empty collection, indexing out of range, asking to
//! remove more elements than exist) is a programming error and panics with a
//! [`Violation`] message. Fallible `pop_*`/`try_*` variants return `Option`
//! instead.
//!
//! ## Example
//!
//! ```rust
//! use cyclic::Deque;
//!
//! let mut a: Deque<i32> = (1..=3).collect();
//! let b = a.clone(); // O(1), shares the buffer
//!
//! a.prepend(0);
//! a.append(4);
//!
//! assert!(a.iter().eq(&[0, 1, 2, 3, 4]));
//! assert!(b.iter().eq(&[1, 2, 3]));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `trace`-level events for buffer growth and copy-on-write
//!   forks.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Trace-level event that compiles away without the `tracing` feature.
macro_rules! _trace {
    ($($tt:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($tt)+);
    };
}

pub mod buffer;
pub mod capacity;
pub mod collections;
pub mod contract;
pub mod heap;

pub use buffer::RawBuffer;
pub use collections::{Deque, LinkedList, PriorityQueue, Queue, Stack};
pub use contract::Violation;
pub use heap::{Ascending, Comparator, Descending};

// Compile-time assertions for the handle layouts.
const _: () = {
    use core::mem;

    // A deque is a single pointer to its shared buffer.
    assert!(mem::size_of::<Deque<u64>>() == mem::size_of::<usize>());

    // The façades add nothing on top of the deque.
    assert!(mem::size_of::<Stack<u64>>() == mem::size_of::<Deque<u64>>());
    assert!(mem::size_of::<Queue<u64>>() == mem::size_of::<Deque<u64>>());

    // A zero-sized ordering costs nothing.
    assert!(mem::size_of::<PriorityQueue<u64>>() == mem::size_of::<Deque<u64>>());

    // Boxed slice plus two cursors.
    assert!(mem::size_of::<RawBuffer<u64>>() == mem::size_of::<usize>() * 4);
};
