//! The priority queue contract shared by every heap in this crate
//!
//! Unlike `std::collections::BinaryHeap`, these queues are keyed by the items
//! themselves: an item is its own priority, each item is stored at most once,
//! and `decrease_key` names the element to update by its current value rather
//! than by a handle. This lets graph algorithms address queue entries as
//! `(cost, node)` pairs without holding on to any heap-specific state.

use crate::error::QueueError;

/// A min-priority queue of distinct items with `decrease_key` support
///
/// Implementations must agree exactly on observable behavior so that code
/// written against this trait (see [`graph`](crate::graph)) produces the same
/// results with any of them.
///
/// # Example
///
/// ```rust
/// use rust_heap_graphs::{PriorityQueue, QueueError};
/// use rust_heap_graphs::binary_heap::BinaryHeap;
///
/// let mut queue = BinaryHeap::new();
/// queue.add(30);
/// queue.add(10);
/// queue.add(20);
/// queue.decrease_key(&30, 5).unwrap();
///
/// assert_eq!(queue.peek(), Ok(&5));
/// assert_eq!(queue.decrease_key(&20, 25), Err(QueueError::InvalidDecrease));
/// assert_eq!(queue.pop(), Ok(5));
/// assert_eq!(queue.pop(), Ok(10));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self
    where
        Self: Sized;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `item` is in the queue
    fn contains(&self, item: &T) -> bool;

    /// Inserts `item`
    ///
    /// Adding an item that is already present does nothing.
    fn add(&mut self, item: T);

    /// Removes and returns the minimum item
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue has no items.
    fn pop(&mut self) -> Result<T, QueueError>;

    /// Returns the minimum item without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue has no items.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Replaces `old_item` with `new_item`, which must compare strictly less
    ///
    /// # Errors
    /// Checked in this order, leaving the queue unchanged on failure:
    /// - [`QueueError::NotFound`] if `old_item` is not in the queue
    /// - [`QueueError::InvalidDecrease`] if `new_item >= old_item`
    /// - [`QueueError::AlreadyPresent`] if `new_item` is already in the queue
    ///
    /// # Time Complexity
    /// - Binary Heap: O(log n)
    /// - Fibonacci Heap: O(1) amortized
    fn decrease_key(&mut self, old_item: &T, new_item: T) -> Result<(), QueueError>;
}
