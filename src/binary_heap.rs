//! Binary heap with an item index
//!
//! An array-backed binary min-heap that also records where every item sits
//! in the array. The index makes `contains` O(1) and lets `decrease_key`
//! find the slot to update from the item's old value.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `add`          | O(log n)   |
//! | `pop`          | O(log n)   |
//! | `peek`         | O(1)       |
//! | `contains`     | O(1)       |
//! | `decrease_key` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_heap_graphs::PriorityQueue;
//! use rust_heap_graphs::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.add((3, "three"));
//! heap.add((1, "one"));
//! heap.add((2, "two"));
//!
//! assert_eq!(heap.peek(), Ok(&(1, "one")));
//! assert_eq!(heap.pop(), Ok((1, "one")));
//! assert_eq!(heap.pop(), Ok((2, "two")));
//! assert_eq!(heap.pop(), Ok((3, "three")));
//! assert!(heap.pop().is_err());
//! ```

use crate::error::QueueError;
use crate::traits::PriorityQueue;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A binary min-heap of distinct items
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    /// Heap-ordered items: `items[(i - 1) / 2] <= items[i]`
    items: Vec<T>,
    /// Inverse of `items`
    positions: FxHashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> BinaryHeap<T> {
    /// Creates an empty heap with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Swaps two slots and records their new positions
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.record(a);
        self.record(b);
    }

    fn record(&mut self, index: usize) {
        if let Some(position) = self.positions.get_mut(&self.items[index]) {
            *position = index;
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] < self.items[parent] {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property, returning
    /// the index it settled at
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }

            if smallest == index {
                return index;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord + Hash + Clone> PriorityQueue<T> for BinaryHeap<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    fn add(&mut self, item: T) {
        if self.positions.contains_key(&item) {
            return;
        }
        let index = self.items.len();
        self.positions.insert(item.clone(), index);
        self.items.push(item);
        self.sift_up(index);
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let min = self.items.swap_remove(0);
        self.positions.remove(&min);

        if !self.items.is_empty() {
            self.record(0);
            let settled = self.sift_down(0);
            self.sift_up(settled);
        }

        Ok(min)
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.items.first().ok_or(QueueError::EmptyQueue)
    }

    fn decrease_key(&mut self, old_item: &T, new_item: T) -> Result<(), QueueError> {
        let index = *self.positions.get(old_item).ok_or(QueueError::NotFound)?;
        if new_item >= *old_item {
            return Err(QueueError::InvalidDecrease);
        }
        if self.positions.contains_key(&new_item) {
            return Err(QueueError::AlreadyPresent);
        }

        self.positions.remove(old_item);
        self.positions.insert(new_item.clone(), index);
        self.items[index] = new_item;
        // A smaller key can only need to move towards the root
        self.sift_up(index);
        Ok(())
    }
}

impl<T: Ord + Hash + Clone> Default for BinaryHeap<T> {
    fn default() -> Self {
        <Self as PriorityQueue<T>>::new()
    }
}
