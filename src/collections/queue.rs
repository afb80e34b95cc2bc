//! `Queue` - a FIFO façade over [`Deque`].

use core::fmt;

use crate::collections::deque::{self, Deque};

/// A first-in, first-out queue with copy-on-write value semantics.
///
/// ```
/// use cyclic::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// assert_eq!(queue.front(), Some(&'a'));
/// assert_eq!(queue.dequeue(), 'a');
/// ```
pub struct Queue<T> {
    items: Deque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { items: Deque::new() }
    }

    /// Creates an empty queue with room for at least `minimum` elements.
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

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The element that will be dequeued next.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// The most recently enqueued element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates in dequeue order.
    pub fn iter(&self) -> deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element and releases the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Queue<T> {
    /// Adds `value` at the back.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        self.items.remove_first()
    }

    /// Removes the front element, or returns `None` if empty.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Clone> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.append_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
