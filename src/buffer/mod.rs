//! Owned circular storage.
//!
//! [`RawBuffer`] is the single storage primitive of the crate; every other
//! collection either wraps one directly or shares one through a [`Deque`].
//!
//! [`Deque`]: crate::Deque

mod raw;

pub use raw::RawBuffer;
