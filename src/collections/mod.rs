//! Value-semantics collections.
//!
//! Collections are organized by access pattern:
//! - `deque`: the copy-on-write double-ended queue everything else builds on
//! - `priority_queue`: a binary heap ordered by a fixed [`Comparator`]
//! - `stack` / `queue`: LIFO and FIFO façades over a deque
//! - `linked_list`: an arena-backed doubly linked list
//!
//! [`Comparator`]: crate::Comparator

pub mod deque;
pub mod linked_list;
pub mod priority_queue;
pub mod queue;
pub mod stack;

mod serde_impls;

pub use deque::Deque;
pub use linked_list::LinkedList;
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
