//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized add and decrease_key
//! - O(log n) amortized pop
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so are the children of every node. The
//! heap maintains the minimum root.
//!
//! Nodes live in a [`SlotMap`] arena and refer to each other by key, so the
//! cyclic sibling lists and parent back-links need neither reference counting
//! nor raw pointers. An item index maps each item to its node, which is how
//! `decrease_key` locates the node for an old item value.

use crate::error::QueueError;
use crate::traits::PriorityQueue;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::hash::Hash;
use tracing::trace;

new_key_type! {
    /// Arena key of a heap node
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    parent: Option<NodeKey>,
    /// Any one child; the rest are reached through its sibling links
    child: Option<NodeKey>,
    left: NodeKey,
    right: NodeKey,
    degree: usize,
    /// Lost a child since it last became a child itself. Never set on roots.
    marked: bool,
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_heap_graphs::PriorityQueue;
/// use rust_heap_graphs::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.add(5);
/// heap.add(3);
/// heap.decrease_key(&5, 1).unwrap();
/// assert_eq!(heap.peek(), Ok(&1));
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciHeap<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    index: FxHashMap<T, NodeKey>,
    min: Option<NodeKey>,
}

impl<T: Ord + Hash + Clone> PriorityQueue<T> for FibonacciHeap<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            index: FxHashMap::default(),
            min: None,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    fn add(&mut self, item: T) {
        if self.index.contains_key(&item) {
            return;
        }

        let key = self.nodes.insert_with_key(|key| Node {
            item: item.clone(),
            parent: None,
            child: None,
            left: key,
            right: key,
            degree: 0,
            marked: false,
        });
        self.index.insert(item, key);
        self.add_root(key);
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        let (min, removed) = self
            .min
            .and_then(|min| Some((min, self.nodes.remove(min)?)))
            .ok_or(QueueError::EmptyQueue)?;
        self.index.remove(&removed.item);

        // Promote children to roots
        let children = self.siblings(removed.child);
        for &child in &children {
            let node = &mut self.nodes[child];
            node.parent = None;
            node.marked = false;
        }

        // Close the gap the old minimum left in the root list
        let start = if removed.right == min {
            children.first().copied()
        } else {
            self.nodes[removed.left].right = removed.right;
            self.nodes[removed.right].left = removed.left;
            for &child in &children {
                self.splice(child, removed.right);
            }
            Some(removed.right)
        };

        match start {
            Some(start) => self.consolidate(start),
            None => self.min = None,
        }
        Ok(removed.item)
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.min
            .map(|min| &self.nodes[min].item)
            .ok_or(QueueError::EmptyQueue)
    }

    fn decrease_key(&mut self, old_item: &T, new_item: T) -> Result<(), QueueError> {
        let key = *self.index.get(old_item).ok_or(QueueError::NotFound)?;
        if new_item >= *old_item {
            return Err(QueueError::InvalidDecrease);
        }
        if self.index.contains_key(&new_item) {
            return Err(QueueError::AlreadyPresent);
        }

        self.index.remove(old_item);
        self.index.insert(new_item.clone(), key);
        self.nodes[key].item = new_item;

        match self.nodes[key].parent {
            None => {
                if let Some(min) = self.min {
                    if self.nodes[key].item < self.nodes[min].item {
                        self.min = Some(key);
                    }
                }
            }
            Some(parent) => {
                if self.nodes[key].item < self.nodes[parent].item {
                    self.cut(key, parent);
                    self.cascading_cut(parent);
                }
            }
        }
        Ok(())
    }
}

impl<T: Ord + Hash + Clone> FibonacciHeap<T> {
    /// Returns the largest number of children held by any node
    ///
    /// Cascading cuts keep this at most `log_phi(len)`, where `phi` is the
    /// golden ratio.
    pub fn max_degree(&self) -> usize {
        self.nodes.values().map(|node| node.degree).max().unwrap_or(0)
    }

    /// Collects the circular list containing `start`
    fn siblings(&self, start: Option<NodeKey>) -> SmallVec<[NodeKey; 16]> {
        let mut keys = SmallVec::new();
        if let Some(start) = start {
            let mut current = start;
            loop {
                keys.push(current);
                current = self.nodes[current].right;
                if current == start {
                    break;
                }
            }
        }
        keys
    }

    /// Inserts `key` to the left of `anchor` in the anchor's circular list
    fn splice(&mut self, key: NodeKey, anchor: NodeKey) {
        let anchor_left = self.nodes[anchor].left;
        self.nodes[key].right = anchor;
        self.nodes[key].left = anchor_left;
        self.nodes[anchor_left].right = key;
        self.nodes[anchor].left = key;
    }

    /// Removes `key` from its circular list, leaving it a singleton
    fn unlink(&mut self, key: NodeKey) {
        let Node { left, right, .. } = self.nodes[key];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[key].left = key;
        self.nodes[key].right = key;
    }

    /// Adds a detached node to the root list, updating the minimum
    fn add_root(&mut self, key: NodeKey) {
        match self.min {
            None => {
                self.nodes[key].left = key;
                self.nodes[key].right = key;
                self.min = Some(key);
            }
            Some(min) => {
                self.splice(key, min);
                if self.nodes[key].item < self.nodes[min].item {
                    self.min = Some(key);
                }
            }
        }
    }

    /// Links trees of equal degree until every root has a distinct degree
    fn consolidate(&mut self, start: NodeKey) {
        let roots = self.siblings(Some(start));
        let mut by_degree: SmallVec<[Option<NodeKey>; 64]> = SmallVec::new();

        for root in roots {
            let mut x = root;
            let mut degree = self.nodes[x].degree;

            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else {
                    break;
                };

                // Ensure x has the smaller item
                if self.nodes[y].item < self.nodes[x].item {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }

            by_degree[degree] = Some(x);
        }

        self.min = None;
        let mut roots = 0usize;
        for root in by_degree.into_iter().flatten() {
            roots += 1;
            match self.min {
                Some(min) if self.nodes[min].item <= self.nodes[root].item => {}
                _ => self.min = Some(root),
            }
        }
        trace!(roots, "consolidated root list");
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: NodeKey, x: NodeKey) {
        self.unlink(y);
        self.nodes[y].parent = Some(x);
        self.nodes[y].marked = false;

        match self.nodes[x].child {
            Some(child) => self.splice(y, child),
            None => self.nodes[x].child = Some(y),
        }
        self.nodes[x].degree += 1;
    }

    /// Moves `key` from the child list of `parent` to the root list
    fn cut(&mut self, key: NodeKey, parent: NodeKey) {
        if self.nodes[parent].child == Some(key) {
            let right = self.nodes[key].right;
            self.nodes[parent].child = if right == key { None } else { Some(right) };
        }
        self.unlink(key);
        self.nodes[parent].degree -= 1;

        let node = &mut self.nodes[key];
        node.parent = None;
        node.marked = false;
        self.add_root(key);
    }

    /// Walks up from a node that just lost a child, cutting marked ancestors
    fn cascading_cut(&mut self, mut key: NodeKey) {
        let mut cuts = 0usize;
        while let Some(parent) = self.nodes[key].parent {
            if !self.nodes[key].marked {
                self.nodes[key].marked = true;
                break;
            }
            self.cut(key, parent);
            cuts += 1;
            key = parent;
        }
        if cuts > 0 {
            trace!(cuts, "cascading cut");
        }
    }
}

impl<T: Ord + Hash + Clone> Default for FibonacciHeap<T> {
    fn default() -> Self {
        <Self as PriorityQueue<T>>::new()
    }
}
