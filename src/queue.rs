use crate::heap::MinHeap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FromIterator;

/// Queue that hands out entries in ascending priority order. All
/// operations forward to the [`MinHeap`] it owns.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T> {
    heap: MinHeap<P, T>,
}

impl<P, T> PriorityQueue<P, T>
where
    P: Ord,
{
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, priority: P, item: T) {
        self.heap.push(priority, item);
    }

    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop_min()
    }

    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap.peek_min()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.heap.iter()
    }
}

impl<P: Ord, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for PriorityQueue<P, T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
    {
        Self {
            heap: MinHeap::from_iter(iter),
        }
    }
}

impl<P: Ord, T> Extend<(P, T)> for PriorityQueue<P, T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (P, T)>,
    {
        self.heap.extend(iter);
    }
}

impl<P, T> Serialize for PriorityQueue<P, T>
where
    P: Serialize,
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.heap.serialize(serializer)
    }
}

impl<'de, P, T> Deserialize<'de> for PriorityQueue<P, T>
where
    P: Deserialize<'de> + Ord,
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let heap = MinHeap::deserialize(deserializer)?;
        Ok(Self { heap })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_scenario() {
        let mut queue = PriorityQueue::new();
        queue.push(5, "a");
        queue.push(1, "b");
        queue.push(3, "c");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some((&1, &"b")));
        assert_eq!(queue.pop(), Some((1, "b")));
        assert_eq!(queue.pop(), Some((3, "c")));
        assert_eq!(queue.pop(), Some((5, "a")));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_matches_heap() {
        let pairs = [(4, 'd'), (2, 'b'), (9, 'i'), (2, 'a'), (7, 'g')];

        let mut queue = PriorityQueue::new();
        let mut heap = MinHeap::new();
        for &(priority, item) in &pairs {
            queue.push(priority, item);
            heap.push(priority, item);
        }

        assert_eq!(queue.len(), heap.len());
        assert_eq!(queue.peek(), heap.peek_min());

        while let Some(expected) = heap.pop_min() {
            assert_eq!(queue.pop(), Some(expected));
        }
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_drains_in_priority_order() {
        let mut queue: PriorityQueue<i64, usize> =
            vec![(8, 0), (3, 1), (5, 2), (3, 3), (11, 4), (0, 5)]
                .into_iter()
                .collect();

        let mut priorities = vec![];
        while let Some((priority, _)) = queue.pop() {
            priorities.push(priority);
        }

        assert_eq!(priorities.len(), 6);
        assert!(priorities.iter().tuple_windows().all(|(a, b)| a <= b));
    }

    #[test]
    fn test_clear_and_refill() {
        let mut queue = PriorityQueue::new();
        queue.extend(vec![(1, "a"), (2, "b")]);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);

        queue.push(4, "d");
        assert_eq!(queue.pop(), Some((4, "d")));
    }

    #[test]
    fn test_serde_round_trip() {
        let queue: PriorityQueue<u8, String> = vec![(9, "i".to_string()), (4, "d".to_string())]
            .into_iter()
            .collect();

        let encoded = serde_json::to_string(&queue).unwrap();
        let mut decoded: PriorityQueue<u8, String> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.pop(), Some((4, "d".to_string())));
        assert_eq!(decoded.pop(), Some((9, "i".to_string())));
        assert_eq!(decoded.pop(), None);
    }
}
