//! `LinkedList` - a doubly linked list whose nodes live in a shared arena.
//!
//! Nodes are addressed by integer handles into two parallel vectors:
//! - `links`: prev/next handles, touched by every structural operation
//! - `values`: element storage, only touched when an element is read or moved
//!
//! Handle 0 is a sentinel root. Its `next` is the first node and its `prev` the
//! last one, so an empty list is the root linked to itself and insertion never
//! has to special-case the ends. Freed handles are threaded into a free list
//! through their `next` link and reused before the arena grows.
//!
//! The arena sits behind an [`Arc`]; clones share it and the first mutation
//! through a shared handle forks a private copy.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use std::sync::Arc;

use crate::contract::{check_index, violated, Violation};

/// Handle of the sentinel root. Also terminates the free list.
const ROOT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    prev: usize,
    next: usize,
}

impl Link {
    const DETACHED: Link = Link { prev: ROOT, next: ROOT };
}

#[derive(Clone)]
struct Arena<T> {
    links: Vec<Link>,
    /// `None` for the root and for free slots.
    values: Vec<Option<T>>,
    free: usize,
    len: usize,
}

impl<T> Arena<T> {
    fn with_capacity(nodes: usize) -> Self {
        let mut links = Vec::with_capacity(nodes + 1);
        let mut values = Vec::with_capacity(nodes + 1);
        links.push(Link::DETACHED);
        values.push(None);
        Self {
            links,
            values,
            free: ROOT,
            len: 0,
        }
    }

    #[inline]
    fn first(&self) -> usize {
        self.links[ROOT].next
    }

    #[inline]
    fn last(&self) -> usize {
        self.links[ROOT].prev
    }

    #[inline]
    fn value(&self, node: usize) -> Option<&T> {
        self.values[node].as_ref()
    }

    /// Handle of the node at `index`, walking from whichever end is nearer.
    fn locate(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        if index < self.len / 2 {
            let mut node = self.first();
            for _ in 0..index {
                node = self.links[node].next;
            }
            node
        } else {
            let mut node = self.last();
            for _ in index + 1..self.len {
                node = self.links[node].prev;
            }
            node
        }
    }

    /// Stores `value` in a free slot, or a new one if none is free.
    fn alloc(&mut self, value: T) -> usize {
        if self.free == ROOT {
            self.links.push(Link::DETACHED);
            self.values.push(Some(value));
            return self.links.len() - 1;
        }
        let node = self.free;
        self.free = self.links[node].next;
        self.links[node] = Link::DETACHED;
        self.values[node] = Some(value);
        node
    }

    /// Links a new node holding `value` right before `at`. Linking before the
    /// root appends.
    fn link_before(&mut self, at: usize, value: T) -> usize {
        let node = self.alloc(value);
        let prev = self.links[at].prev;
        self.links[node] = Link { prev, next: at };
        self.links[prev].next = node;
        self.links[at].prev = node;
        self.len += 1;
        node
    }

    /// Unlinks `node`, returns its value and puts the slot on the free list.
    fn unlink(&mut self, node: usize) -> T {
        debug_assert!(node != ROOT);
        let Link { prev, next } = self.links[node];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.links[node] = Link {
            prev: ROOT,
            next: self.free,
        };
        self.free = node;
        self.len -= 1;
        match self.values[node].take() {
            Some(value) => value,
            None => panic!("corrupted list: linked node {node} holds no value"),
        }
    }

    fn clear(&mut self) {
        self.links.truncate(1);
        self.values.truncate(1);
        self.links[ROOT] = Link::DETACHED;
        self.free = ROOT;
        self.len = 0;
    }
}

/// A doubly linked list with copy-on-write value semantics.
///
/// ```
/// use cyclic::LinkedList;
///
/// let mut list: LinkedList<_> = ["b", "c"].into_iter().collect();
/// list.prepend("a");
/// list.insert(3, "d");
/// assert!(list.iter().eq(&["a", "b", "c", "d"]));
/// assert_eq!(list.remove(1), "b");
/// assert_eq!(list.get(1), Some(&"c"));
/// ```
pub struct LinkedList<T> {
    arena: Arc<Arena<T>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list whose arena has room for `nodes` elements.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: Arc::new(Arena::with_capacity(nodes)),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.len == 0
    }

    /// Returns the first element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.arena.value(self.arena.first())
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.arena.value(self.arena.last())
    }

    /// Returns the element at `index`, or `None` if out of range.
    ///
    /// Walks from the nearer end, so this is O(min(index, len - index)).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.arena.value(self.arena.locate(index))
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            head: self.arena.first(),
            tail: self.arena.last(),
            remaining: self.arena.len,
        }
    }

    /// Returns `true` if no other list shares this list's arena.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.arena) == 1
    }

    /// Removes every element.
    ///
    /// A shared arena is left to its other owners and this list starts over
    /// with a fresh one.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        match Arc::get_mut(&mut self.arena) {
            Some(arena) => {
                arena.clear();
                if !keep_capacity {
                    arena.links.shrink_to_fit();
                    arena.values.shrink_to_fit();
                }
            }
            None => {
                let nodes = if keep_capacity { self.arena.links.capacity() - 1 } else { 0 };
                self.arena = Arc::new(Arena::with_capacity(nodes));
            }
        }
    }

    /// Removes every element and releases the arena.
    #[inline]
    pub fn clear(&mut self) {
        self.remove_all(false);
    }
}

impl<T: Clone> LinkedList<T> {
    fn unique(&mut self) -> &mut Arena<T> {
        if !self.is_unique() {
            _trace!(len = self.len(), "forking shared list arena");
        }
        Arc::make_mut(&mut self.arena)
    }

    /// Inserts `value` at the back.
    pub fn append(&mut self, value: T) {
        self.unique().link_before(ROOT, value);
    }

    /// Inserts `value` at the front.
    pub fn prepend(&mut self, value: T) {
        let arena = self.unique();
        let first = arena.first();
        arena.link_before(first, value);
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len();
        if index > len {
            violated(Violation::IndexOutOfRange { index, len });
        }
        let arena = self.unique();
        let at = if index == len { ROOT } else { arena.locate(index) };
        arena.link_before(at, value);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        check_index(index, self.len());
        let arena = self.unique();
        let node = arena.locate(index);
        arena.unlink(node)
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_first(&mut self) -> T {
        match self.pop_front() {
            Some(value) => value,
            None => violated(Violation::Empty),
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_last(&mut self) -> T {
        match self.pop_back() {
            Some(value) => value,
            None => violated(Violation::Empty),
        }
    }

    /// Removes the first element, or returns `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let arena = self.unique();
        let first = arena.first();
        Some(arena.unlink(first))
    }

    /// Removes the last element, or returns `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let arena = self.unique();
        let last = arena.last();
        Some(arena.unlink(last))
    }
}

impl<T> Clone for LinkedList<T> {
    /// Shares the arena; copying is deferred to the first mutation.
    fn clone(&self) -> Self {
        Self {
            arena: Arc::clone(&self.arena),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T: Clone> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let arena = self.unique();
        for value in iter {
            arena.link_before(ROOT, value);
        }
    }
}

impl<T: Clone> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    head: usize,
    tail: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.head;
        self.head = self.arena.links[node].next;
        self.remaining -= 1;
        self.arena.value(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.tail;
        self.tail = self.arena.links[node].prev;
        self.remaining -= 1;
        self.arena.value(node)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`], front to back.
pub struct IntoIter<T: Clone> {
    list: LinkedList<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
