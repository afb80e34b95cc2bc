//! `Stack` - a LIFO façade over [`Deque`].
//!
//! The top of the stack is the front of the deque: `push` prepends and `pop`
//! removes the first element.

use core::fmt;

use crate::collections::deque::{self, Deque};

/// A last-in, first-out stack with copy-on-write value semantics.
///
/// ```
/// use cyclic::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.pop(), 1);
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    items: Deque<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Deque::new() }
    }

    /// Creates an empty stack with room for at least `minimum` elements.
    pub fn with_capacity(minimum: usize) -> Self {
        Self {
            items: Deque::with_capacity(minimum),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The most recently pushed element.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element and releases the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes `value` on top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.prepend(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        self.items.remove_first()
    }

    /// Removes the top element, or returns `None` if empty.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Stack<T> {}

/// Pushes in iteration order, so the last element ends up on top.
impl<T: Clone> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut stack = Self::with_capacity(iter.size_hint().0);
        stack.extend(iter);
        stack
    }
}

impl<T: Clone> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
