//! Array-backed binary heap with a pluggable comparer
//!
//! Positions are 1-based: the root lives at position 1 and the children of
//! position `i` are `2i` and `2i + 1`, so the parent of `i` is `i / 2`.
//! Position 0 is never occupied; the backing vector stores position `p` at
//! offset `p - 1`.
//!
//! A max-heap is the same structure driven by the reversed comparer, so a
//! single sift-up/sift-down pair serves both orderings.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapType {
    /// Smallest element at the root
    #[default]
    Min,
    /// Largest element at the root
    Max,
}

/// Comparer type used when the heap is built from a plain function
pub type NaturalComparer<T> = fn(&T, &T) -> Ordering;

/// Binary heap ordered by a caller-supplied comparer
pub struct Heap<T, C = NaturalComparer<T>> {
    data: Vec<T>,
    heap_type: HeapType,
    comparer: C,
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `comparer`
    pub fn new(heap_type: HeapType, comparer: C) -> Self {
        Self::with_capacity(heap_type, 0, comparer)
    }

    /// Create an empty heap with room for `capacity` elements
    pub fn with_capacity(heap_type: HeapType, capacity: usize, comparer: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            heap_type,
            comparer,
        }
    }

    pub fn heap_type(&self) -> HeapType {
        self.heap_type
    }

    /// Number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Peek at the root (minimum for a min-heap, maximum for a max-heap)
    pub fn root(&self) -> Result<&T> {
        self.data.first().ok_or(WayfinderError::EmptyHeap)
    }

    /// Insert an item, sifting it up to the first position where the heap
    /// property holds.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        let mut pos = self.data.len();

        while pos > 1 {
            let parent = pos / 2;
            if self.compare(parent, pos) != Ordering::Greater {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    /// Remove and return the root.
    ///
    /// The last element is moved into the root and sifted down; at each level
    /// the smaller child wins, ties go to the left child, and the walk stops
    /// as soon as the displaced element is not greater than that child.
    pub fn remove_root(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(WayfinderError::EmptyHeap);
        }

        let root = self.data.swap_remove(0);
        self.sift_down(1);
        Ok(root)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate in array order. This is NOT sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drain the heap root by root, yielding elements in heap order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.remove_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Mutable access to the elements in array order.
    ///
    /// Mutating the ordering key through this iterator does not restore the
    /// heap property; it is only restored for the paths touched by later
    /// `add`/`remove_root` calls.
    pub(crate) fn iter_mut_unordered(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * pos;
            if left > len {
                break;
            }

            let right = left + 1;
            let child = if right <= len && self.compare(right, left) == Ordering::Less {
                right
            } else {
                left
            };

            if self.compare(pos, child) != Ordering::Greater {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }

    /// Compare the elements at two 1-based positions under the effective
    /// ordering (reversed for max-heaps).
    fn compare(&self, a: usize, b: usize) -> Ordering {
        let ordering = (self.comparer)(&self.data[a - 1], &self.data[b - 1]);
        match self.heap_type {
            HeapType::Min => ordering,
            HeapType::Max => ordering.reverse(),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }
}

impl<T: Ord> Heap<T> {
    /// Min-heap using the natural ordering of `T`
    pub fn min() -> Self {
        Self::new(HeapType::Min, T::cmp as NaturalComparer<T>)
    }

    /// Max-heap using the natural ordering of `T`
    pub fn max() -> Self {
        Self::new(HeapType::Max, T::cmp as NaturalComparer<T>)
    }
}

impl<T, C> Extend<T> for Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("heap_type", &self.heap_type)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
