//! Priority queue built on [`Heap`] and [`Association`]
//!
//! Items are wrapped in an `Association<i32, T>` whose key is the priority.
//! A minimum queue dequeues the lowest priority first, a maximum queue the
//! highest.
//!
//! # Bulk priority shifts
//!
//! [`PriorityQueue::increase_item_priority`] and
//! [`PriorityQueue::decrease_item_priority`] rewrite every key in place and do
//! not re-heapify. Until the next `enqueue` or `dequeue` the value returned by
//! `peek` is not guaranteed to be the extreme element.

use crate::association::Association;
use crate::error::Result;
use crate::heap::{Heap, HeapType, NaturalComparer};

/// Priority given to items enqueued without an explicit priority
pub const DEFAULT_PRIORITY: i32 = 0;

/// Queue of items ordered by an integer priority
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: Heap<Association<i32, T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue. `HeapType::Min` dequeues low priorities first.
    pub fn new(queue_type: HeapType) -> Self {
        Self {
            heap: Heap::new(queue_type, Association::compare_keys as NaturalComparer<_>),
        }
    }

    pub fn with_capacity(queue_type: HeapType, capacity: usize) -> Self {
        Self {
            heap: Heap::with_capacity(
                queue_type,
                capacity,
                Association::compare_keys as NaturalComparer<_>,
            ),
        }
    }

    pub fn queue_type(&self) -> HeapType {
        self.heap.heap_type()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Enqueue with the default priority
    pub fn enqueue(&mut self, item: T) {
        self.enqueue_with_priority(item, DEFAULT_PRIORITY);
    }

    pub fn enqueue_with_priority(&mut self, item: T, priority: i32) {
        self.heap.add(Association::new(priority, item));
    }

    /// Remove and return the item at the front of the queue
    pub fn dequeue(&mut self) -> Result<T> {
        Ok(self.heap.remove_root()?.value)
    }

    /// Remove the front item, returning `(priority, item)`
    pub fn dequeue_with_priority(&mut self) -> Result<(i32, T)> {
        Ok(self.heap.remove_root()?.into_parts())
    }

    /// Peek at the front item without removing it
    pub fn peek(&self) -> Result<&T> {
        Ok(&self.heap.root()?.value)
    }

    /// Add `by` to every priority in the queue (saturating)
    pub fn increase_item_priority(&mut self, by: i32) {
        for entry in self.heap.iter_mut_unordered() {
            entry.key = entry.key.saturating_add(by);
        }
    }

    /// Subtract `by` from every priority in the queue (saturating)
    pub fn decrease_item_priority(&mut self, by: i32) {
        for entry in self.heap.iter_mut_unordered() {
            entry.key = entry.key.saturating_sub(by);
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterate `(priority, item)` pairs in array order, not dequeue order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &T)> {
        self.heap.iter().map(|entry| (entry.key, &entry.value))
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(HeapType::Min)
    }
}

impl<T> Extend<(T, i32)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i32)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue_with_priority(item, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WayfinderError;

    #[test]
    fn test_min_queue_dequeues_lowest_priority_first() {
        let mut queue = PriorityQueue::new(HeapType::Min);
        queue.enqueue_with_priority("write", 5);
        queue.enqueue_with_priority("read", 1);
        queue.enqueue_with_priority("flush", 3);

        assert_eq!(queue.dequeue().unwrap(), "read");
        assert_eq!(queue.dequeue().unwrap(), "flush");
        assert_eq!(queue.dequeue().unwrap(), "write");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_max_queue_dequeues_highest_priority_first() {
        let mut queue = PriorityQueue::new(HeapType::Max);
        queue.extend([("low", -2), ("high", 9), ("mid", 4)]);

        assert_eq!(queue.queue_type(), HeapType::Max);
        assert_eq!(*queue.peek().unwrap(), "high");
        assert_eq!(queue.dequeue_with_priority().unwrap(), (9, "high"));
        assert_eq!(queue.dequeue_with_priority().unwrap(), (4, "mid"));
    }

    #[test]
    fn test_enqueue_uses_default_priority() {
        let mut queue = PriorityQueue::default();
        queue.enqueue('a');
        queue.enqueue_with_priority('b', -1);

        assert_eq!(queue.dequeue_with_priority().unwrap(), (-1, 'b'));
        assert_eq!(queue.dequeue_with_priority().unwrap(), (DEFAULT_PRIORITY, 'a'));
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<u8> = PriorityQueue::with_capacity(HeapType::Min, 4);

        assert!(matches!(queue.peek(), Err(WayfinderError::EmptyHeap)));
        assert!(matches!(queue.dequeue(), Err(WayfinderError::EmptyHeap)));
    }

    #[test]
    fn test_bulk_priority_shift_rewrites_every_key() {
        let mut queue = PriorityQueue::new(HeapType::Min);
        queue.extend([('a', 1), ('b', 2), ('c', 3)]);

        queue.increase_item_priority(10);
        let mut keys: Vec<i32> = queue.iter().map(|(priority, _)| priority).collect();
        keys.sort();
        assert_eq!(keys, vec![11, 12, 13]);

        queue.decrease_item_priority(20);
        assert_eq!(queue.dequeue_with_priority().unwrap(), (-9, 'a'));
    }

    #[test]
    fn test_bulk_priority_shift_saturates() {
        let mut queue = PriorityQueue::new(HeapType::Min);
        queue.enqueue_with_priority('x', i32::MAX - 1);

        queue.increase_item_priority(5);
        assert_eq!(queue.dequeue_with_priority().unwrap(), (i32::MAX, 'x'));
    }

    #[test]
    fn test_order_restored_after_shift_and_enqueue() {
        let mut queue = PriorityQueue::new(HeapType::Min);
        queue.extend([('a', 4), ('b', 6)]);
        queue.decrease_item_priority(3);
        queue.enqueue_with_priority('c', 2);

        assert_eq!(queue.dequeue_with_priority().unwrap(), (1, 'a'));
        assert_eq!(queue.dequeue_with_priority().unwrap(), (2, 'c'));
        assert_eq!(queue.dequeue_with_priority().unwrap(), (3, 'b'));
        queue.clear();
        assert_eq!(queue.len(), 0);
    }
}
