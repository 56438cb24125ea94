//! Min-priority queue used by both the cost minimizer and the k-way merge.
//!
//! A thin wrapper over [`BinaryHeap`] with [`Reverse`] keys so the smallest
//! element comes out first. `build` heapifies in place (O(n)); `push` and
//! `pop_min` are O(log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::EmptyQueueError;

// ---------------------------------------------------------------------------
// MinPriorityQueue
// ---------------------------------------------------------------------------

/// A binary min-heap.
///
/// Not thread-safe in any interesting sense: each operation allocates its own
/// queue and drops it on return.
#[derive(Clone, Debug)]
pub struct MinPriorityQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Consume `items` and establish heap order in linear time.
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<Reverse<T>> = items.into_iter().map(Reverse).collect();
        Self {
            heap: BinaryHeap::from(items),
        }
    }

    /// Insert one element.
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove and return the smallest element.
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    pub fn pop_min(&mut self) -> Result<T, EmptyQueueError> {
        self.heap
            .pop()
            .map(|Reverse(item)| item)
            .ok_or(EmptyQueueError)
    }

    /// The smallest element, without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain the queue into a vector in non-decreasing order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        // `Reverse` inverts the order, so the sorted heap is largest-first.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|Reverse(item)| item)
            .collect()
    }
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for MinPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(Reverse));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
