//! `serde` support. Every container serializes as a plain sequence.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::{Deque, LinkedList, PriorityQueue};
use crate::heap::Comparator;

/// Largest length hint trusted when pre-sizing a container.
const MAX_PREALLOCATION: usize = 4096;

/// A container filled one element at a time from a sequence.
trait SeqSink<T>: Sized {
    fn with_capacity(minimum: usize) -> Self;

    fn push(&mut self, value: T);
}

impl<T: Clone> SeqSink<T> for Deque<T> {
    fn with_capacity(minimum: usize) -> Self {
        Deque::with_capacity(minimum)
    }

    fn push(&mut self, value: T) {
        self.append(value);
    }
}

impl<T: Clone> SeqSink<T> for LinkedList<T> {
    fn with_capacity(minimum: usize) -> Self {
        LinkedList::with_capacity(minimum)
    }

    fn push(&mut self, value: T) {
        self.append(value);
    }
}

/// Streams a sequence into a container sized once from the length hint.
struct SeqVisitor<C, T>(PhantomData<(C, T)>);

impl<'de, C, T> Visitor<'de> for SeqVisitor<C, T>
where
    C: SeqSink<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATION);
        let mut this = C::with_capacity(hint);
        while let Some(elem) = seq.next_element()? {
            this.push(elem);
        }
        Ok(this)
    }
}

impl<T: Serialize> Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for Deque<T>
where
    T: Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}

/// Serializes the backing storage in heap order.
impl<T: Serialize, C> Serialize for PriorityQueue<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Accepts any sequence and heapifies it under `C::default()`.
impl<'de, T, C> Deserialize<'de> for PriorityQueue<T, C>
where
    T: Clone + Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_iter_with_order(values, C::default()))
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for LinkedList<T>
where
    T: Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}
