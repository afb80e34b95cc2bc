//! Precondition failures.
//!
//! None of the containers in this crate report recoverable errors: calling an
//! operation outside its contract is a programming error and aborts the
//! operation with a panic. [`Violation`] names each contract so the panic
//! messages are uniform and tests can match on them.

use core::fmt;

/// A broken precondition of a container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// An element was requested from an empty container.
    Empty,
    /// An index was outside `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A bulk removal asked for more elements than the container holds.
    RemoveTooMany {
        /// Number of elements the caller asked to remove.
        requested: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A flat-view callback replaced or resized the storage it was lent.
    StorageReplaced,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => f.write_str("can't remove items from an empty collection"),
            Violation::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: the len is {len} but the index is {index}")
            }
            Violation::RemoveTooMany { requested, len } => write!(
                f,
                "can't remove more items from a collection than it contains ({requested} > {len})"
            ),
            Violation::StorageReplaced => f.write_str("replacing the storage is not allowed"),
        }
    }
}

impl std::error::Error for Violation {}

/// Panics with the message of `violation`, attributed to the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violated(violation: Violation) -> ! {
    panic!("{violation}")
}

/// Panics with [`Violation::IndexOutOfRange`] unless `index < len`.
#[inline]
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        violated(Violation::IndexOutOfRange { index, len });
    }
}

/// Panics with [`Violation::RemoveTooMany`] unless `requested <= len`.
#[inline]
#[track_caller]
pub(crate) fn check_remove_count(requested: usize, len: usize) {
    if requested > len {
        violated(Violation::RemoveTooMany { requested, len });
    }
}
