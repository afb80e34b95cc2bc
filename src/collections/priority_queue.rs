//! `PriorityQueue` - a binary heap kept in a copy-on-write [`Deque`].
//!
//! The ordering predicate is chosen once, at construction, and can never be
//! replaced: the heap property only holds relative to the predicate that was
//! active when each element was inserted.

use core::fmt;

use crate::collections::deque::{self, Deque};
use crate::contract::{violated, Violation};
use crate::heap::{self, Ascending, Comparator, Descending};

/// A priority queue whose front is the element that comes first under `C`.
///
/// With the default [`Ascending`] order the front is the smallest element.
///
/// ```
/// use cyclic::PriorityQueue;
///
/// let mut queue = PriorityQueue::with_order(|a: &i32, b: &i32| a > b);
/// queue.extend([1, 3, 2]);
/// assert_eq!(queue.front(), Some(&3));
/// assert_eq!(queue.dequeue(), 3);
/// ```
pub struct PriorityQueue<T, C = Ascending> {
    heap: Deque<T>,
    order: C,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue whose front is the smallest element.
    pub fn new() -> Self {
        Self::with_order(Ascending)
    }
}

impl<T> PriorityQueue<T, Descending> {
    /// Creates an empty queue whose front is the largest element.
    pub fn max() -> Self {
        Self::with_order(Descending)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `order`.
    pub fn with_order(order: C) -> Self {
        Self {
            heap: Deque::new(),
            order,
        }
    }

    /// Creates an empty queue ordered by `order` with room for `minimum` elements.
    pub fn with_capacity_and_order(minimum: usize, order: C) -> Self {
        Self {
            heap: Deque::with_capacity(minimum),
            order,
        }
    }

    /// The ordering predicate fixed at construction.
    #[inline]
    pub fn order(&self) -> &C {
        &self.order
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// The element that comes first under the ordering, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Iterates over the elements in heap (not sorted) order.
    pub fn iter(&self) -> deque::Iter<'_, T> {
        self.heap.iter()
    }

    /// Removes every element and releases the buffer.
    pub fn clear(&mut self) {
        self.heap.remove_all(false);
    }
}

impl<T: Clone, C: Comparator<T>> PriorityQueue<T, C> {
    /// Builds a queue from `values` with one linear-time heapify pass.
    pub fn from_iter_with_order<I: IntoIterator<Item = T>>(values: I, order: C) -> Self {
        let mut heap: Deque<T> = values.into_iter().collect();
        if heap.len() > 1 {
            heap::heapify(heap.make_contiguous(), &order);
        }
        Self { heap, order }
    }

    /// Ensures room for at least `minimum` elements.
    pub fn reserve_capacity(&mut self, minimum: usize) {
        self.heap.reserve_capacity(minimum);
    }

    /// Inserts `value`, keeping the heap ordered.
    pub fn enqueue(&mut self, value: T) {
        self.heap.append(value);
        let last = self.heap.len() - 1;
        if last > 0 {
            heap::sift_up(self.heap.make_contiguous(), last, &self.order);
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Some(value) => value,
            None => violated(Violation::Empty),
        }
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn try_dequeue(&mut self) -> Option<T> {
        match self.heap.len() {
            0 => None,
            1 => self.heap.pop_back(),
            len => {
                self.heap.make_contiguous().swap(0, len - 1);
                let front = self.heap.pop_back();
                heap::sift_down(self.heap.make_contiguous(), 0, &self.order);
                front
            }
        }
    }

    /// Returns the backing elements in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().collect()
    }

    /// Drains the queue front first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.try_dequeue() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns `true` if the backing storage satisfies the heap property.
    #[doc(hidden)]
    pub fn is_valid_heap(&self) -> bool {
        let (head, tail) = self.heap.as_slices();
        tail.is_empty() && heap::is_heap(head, &self.order)
    }
}

impl<T, C: Clone> Clone for PriorityQueue<T, C> {
    /// Shares the heap storage; the first mutation of either copy forks it.
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_order(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T: PartialEq, C> PartialEq for PriorityQueue<T, C> {
    /// Compares the backing storage element by element.
    fn eq(&self, other: &Self) -> bool {
        self.heap == other.heap
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let additional = iter.size_hint().0;
        if additional > 0 {
            self.reserve_capacity(self.len() + additional + 1);
        }
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T: Clone, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_order(iter, C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
