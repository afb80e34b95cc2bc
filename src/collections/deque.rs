//! `Deque` - a double-ended queue with copy-on-write value semantics.
//!
//! A `Deque` is a handle to a shared [`RawBuffer`]. Cloning a deque is O(1) and
//! only bumps a reference count; the first mutation through a handle whose
//! buffer is shared duplicates the buffer, so logically independent copies
//! never observe each other's writes.
//!
//! Because a fork has to copy elements, every mutating operation requires
//! `T: Clone`. Read-only access works for any `T`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Chain, FusedIterator};
use core::ops::{Index, IndexMut};
use core::slice;
use std::sync::Arc;

use crate::buffer::RawBuffer;
use crate::contract::{check_index, check_remove_count, violated, Violation};

/// A double-ended queue backed by a shared circular buffer.
pub struct Deque<T> {
    buffer: Arc<RawBuffer<T>>,
}

impl<T> Deque<T> {
    /// Creates an empty deque. Does not allocate.
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(RawBuffer::new()),
        }
    }

    /// Creates an empty deque with room for at least `minimum` elements.
    ///
    /// ```
    /// use cyclic::Deque;
    ///
    /// let deque: Deque<u8> = Deque::with_capacity(5);
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn with_capacity(minimum: usize) -> Self {
        Self {
            buffer: Arc::new(RawBuffer::with_capacity(minimum)),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of slots in the backing buffer. Always zero or a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Returns the first element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.buffer.get(0)
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.buffer.get(i))
    }

    /// The contents as two slices in order; the second is empty unless the
    /// window wraps around the end of the buffer.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.buffer.as_slices()
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter {
            inner: head.iter().chain(tail.iter()),
        }
    }

    /// Returns `true` if no other deque shares this deque's buffer.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.buffer) == 1
    }

    /// Returns `true` if both deques share the same buffer.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.buffer, &other.buffer)
    }

    /// Removes every element.
    ///
    /// With `keep_capacity` the deque keeps a buffer of the same size. A shared
    /// buffer is never copied here: this handle simply gets a fresh one.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        match Arc::get_mut(&mut self.buffer) {
            Some(buffer) => buffer.remove_all(keep_capacity),
            None => {
                let capacity = if keep_capacity { self.capacity() } else { 0 };
                self.buffer = Arc::new(RawBuffer::with_capacity(capacity));
            }
        }
    }

    /// Removes every element and releases the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.remove_all(false);
    }

    /// Lends the contents to `body` as one flat slice.
    ///
    /// Reading is not free of side effects: a wrapped window is made contiguous
    /// first, and if the buffer is shared that rotation forks it. This is why the
    /// method takes `&mut self` and needs `T: Clone`. A contiguous window is lent
    /// in place and never forks. Use [`Deque::as_slices`] for a read that never
    /// touches the buffer.
    pub fn with_slice<R>(&mut self, body: impl FnOnce(&[T]) -> R) -> R
    where
        T: Clone,
    {
        if self.buffer.is_contiguous() {
            return body(self.as_slices().0);
        }
        body(self.make_contiguous())
    }
}

impl<T: Clone> Deque<T> {
    /// Returns the buffer for mutation, duplicating it first if it is shared.
    #[inline]
    fn unique(&mut self) -> &mut RawBuffer<T> {
        if !self.is_unique() {
            _trace!(len = self.len(), capacity = self.capacity(), "forking shared deque buffer");
        }
        Arc::make_mut(&mut self.buffer)
    }

    /// Ensures the capacity is at least `minimum`. No-op if it already is.
    pub fn reserve_capacity(&mut self, minimum: usize) {
        if minimum <= self.capacity() {
            return;
        }
        self.unique().reserve(minimum);
    }

    /// Inserts `value` at the back.
    pub fn append(&mut self, value: T) {
        self.unique().append(value);
    }

    /// Inserts `value` at the front.
    pub fn prepend(&mut self, value: T) {
        self.unique().prepend(value);
    }

    /// Appends every element of `values` in order.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        let buffer = self.unique();
        let additional = values.size_hint().0;
        if additional > 0 {
            buffer.reserve(buffer.len() + additional + 1);
        }
        for value in values {
            buffer.append(value);
        }
    }

    /// Prepends every element of `values`, keeping their relative order.
    ///
    /// ```
    /// use cyclic::Deque;
    ///
    /// let mut deque = Deque::from([3, 4]);
    /// deque.prepend_all([1, 2]);
    /// assert!(deque.iter().eq(&[1, 2, 3, 4]));
    /// ```
    pub fn prepend_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let values = values.into_iter();
        let buffer = self.unique();
        let additional = values.size_hint().0;
        if additional > 0 {
            buffer.reserve(buffer.len() + additional + 1);
        }
        for value in values.rev() {
            buffer.prepend(value);
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn remove_first(&mut self) -> T {
        if self.is_empty() {
            violated(Violation::Empty);
        }
        self.unique().take_first()
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn remove_last(&mut self) -> T {
        if self.is_empty() {
            violated(Violation::Empty);
        }
        self.unique().take_last()
    }

    /// Removes the first element, or returns `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.unique().remove_first()
    }

    /// Removes the last element, or returns `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.unique().remove_last()
    }

    /// Drops the first `n` elements. Removing zero elements never forks.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    #[track_caller]
    pub fn remove_first_n(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        check_remove_count(n, self.len());
        self.unique().remove_first_n(n);
    }

    /// Drops the last `n` elements. Removing zero elements never forks.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    #[track_caller]
    pub fn remove_last_n(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        check_remove_count(n, self.len());
        self.unique().remove_last_n(n);
    }

    /// Returns the element at `index` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        self.unique().get_mut(index)
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        check_index(a, len);
        check_index(b, len);
        if a != b {
            let (head, tail) = self.unique().as_mut_slices();
            let split = head.len();
            match (a < split, b < split) {
                (true, true) => head.swap(a, b),
                (false, false) => tail.swap(a - split, b - split),
                (true, false) => core::mem::swap(&mut head[a], &mut tail[b - split]),
                (false, true) => core::mem::swap(&mut tail[a - split], &mut head[b]),
            }
        }
    }

    /// Makes the contents contiguous and returns them as one mutable slice.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        self.unique().make_contiguous()
    }

    /// Lends the contents to `body` as one flat mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was replaced or resized while `body` ran.
    #[track_caller]
    pub fn with_mut_slice<R>(&mut self, body: impl FnOnce(&mut [T]) -> R) -> R {
        let slice = self.make_contiguous();
        let (base, len) = (slice.as_ptr(), slice.len());
        let result = body(slice);
        let (head, tail) = self.buffer.as_slices();
        if head.as_ptr() != base || head.len() != len || !tail.is_empty() {
            violated(Violation::StorageReplaced);
        }
        result
    }
}

impl<T> Clone for Deque<T> {
    /// Shares the buffer; copying is deferred to the first mutation.
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        check_index(index, self.len());
        let (head, tail) = self.as_slices();
        match head.get(index) {
            Some(value) => value,
            None => &tail[index - head.len()],
        }
    }
}

impl<T: Clone> IndexMut<usize> for Deque<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        check_index(index, len);
        match self.get_mut(index) {
            Some(value) => value,
            None => violated(Violation::IndexOutOfRange { index, len }),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T: Clone> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T: Clone> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buffer = RawBuffer::with_capacity(iter.size_hint().0);
        for value in iter {
            buffer.append(value);
        }
        Self {
            buffer: Arc::new(buffer),
        }
    }
}

impl<T: Clone> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Borrowing iterator over a [`Deque`], front to back.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`Deque`], front to back.
///
/// Takes the buffer over when the deque was its only owner and duplicates it
/// otherwise.
pub struct IntoIter<T> {
    buffer: RawBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.buffer.remove_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.buffer.remove_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            buffer: Arc::unwrap_or_clone(self.buffer),
        }
    }
}
