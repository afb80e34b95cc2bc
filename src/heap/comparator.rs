//! Ordering predicates for heaps.

use serde::{Deserialize, Serialize};

/// A strict ordering predicate fixed for the lifetime of a heap.
///
/// `is_ordered(a, b)` answers "must `a` come before `b`?". The element that
/// precedes every other one sits at the front of the heap. The predicate must
/// be a strict weak ordering: irreflexive, transitive, and with transitive
/// incomparability.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `a` must not come after `b`.
    fn is_ordered(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn is_ordered(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural ordering: smaller elements come first (`a < b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> Comparator<T> for Ascending {
    #[inline(always)]
    fn is_ordered(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reverse natural ordering: larger elements come first (`a > b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> Comparator<T> for Descending {
    #[inline(always)]
    fn is_ordered(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_orderings() {
        assert!(Ascending.is_ordered(&1, &2));
        assert!(!Ascending.is_ordered(&2, &2));
        assert!(Descending.is_ordered(&"b", &"a"));
        assert!(!Descending.is_ordered(&1.0, &1.0));
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &String, b: &String| a.len() < b.len();
        assert!(by_len.is_ordered(&"ab".to_string(), &"abc".to_string()));
    }
}
