//! Array-backed binary min-heap.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FromIterator;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry<P, T> {
    priority: P,
    item: T,
}

/// Binary min-heap storing `(priority, item)` entries as a complete
/// binary tree in a flat vector: the children of the entry at index `i`
/// live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The entry
/// with the smallest priority is always at index 0.
///
/// Items are opaque: the heap moves them around but only ever compares
/// priorities.
#[derive(Debug, Clone)]
pub struct MinHeap<P, T> {
    entries: Vec<Entry<P, T>>,
}

impl<P, T> MinHeap<P, T>
where
    P: Ord,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `item` with the given priority in O(log n).
    pub fn push(&mut self, priority: P, item: T) {
        self.entries.push(Entry { priority, item });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority, or
    /// `None` if the heap is empty.
    pub fn pop_min(&mut self) -> Option<(P, T)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let Entry { priority, item } = self.entries.pop()?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((priority, item))
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        match self.entries.first() {
            Some(entry) => Some((&entry.priority, &entry.item)),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Visits every entry in storage order, which is unspecified beyond
    /// the heap invariant.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.entries.iter().map(|entry| (&entry.priority, &entry.item))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }

            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            if left >= self.entries.len() {
                break;
            }

            // ties between the children resolve to the left child
            let child = if right < self.entries.len()
                && self.entries[left].priority > self.entries[right].priority
            {
                right
            } else {
                left
            };

            if self.entries[index].priority <= self.entries[child].priority {
                break;
            }

            self.entries.swap(index, child);
            index = child;
        }
    }

    fn from_ordered_entries(entries: Vec<Entry<P, T>>) -> Result<Self, HeapOrderError> {
        for index in 1..entries.len() {
            let parent = (index - 1) / 2;

            if entries[parent].priority > entries[index].priority {
                return Err(HeapOrderError { index });
            }
        }

        Ok(Self { entries })
    }
}

/// Error indicating that a decoded entry sequence is not in heap order.
#[derive(Error, Debug)]
#[error("entry at index {index} has a smaller priority than its parent")]
pub struct HeapOrderError {
    pub index: usize,
}

impl<P: Ord, T> Default for MinHeap<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for MinHeap<P, T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
    {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<P: Ord, T> Extend<(P, T)> for MinHeap<P, T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (P, T)>,
    {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<P: Ord, T> From<Vec<(P, T)>> for MinHeap<P, T> {
    fn from(pairs: Vec<(P, T)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<P, T> Serialize for MinHeap<P, T>
where
    P: Serialize,
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de, P, T> Deserialize<'de> for MinHeap<P, T>
where
    P: Deserialize<'de> + Ord,
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let entries = Vec::<Entry<P, T>>::deserialize(deserializer)?;
        MinHeap::from_ordered_entries(entries).map_err(D::Error::custom)
    }
}
