//! Error types for queue and graph operations
//!
//! Every error is a fail-fast contract violation: the operation that returns
//! it has not mutated the structure it was called on.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors returned by [`PriorityQueue`](crate::PriorityQueue) operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `pop` or `peek` on a queue with no items
    #[error("queue is empty")]
    EmptyQueue,

    /// The old item passed to `decrease_key` is not in the queue
    #[error("item is not in the queue")]
    NotFound,

    /// The new item passed to `decrease_key` is already in the queue
    #[error("item is already in the queue")]
    AlreadyPresent,

    /// The new item passed to `decrease_key` is not strictly less than the old one
    #[error("new item is not less than the item it replaces")]
    InvalidDecrease,
}

/// Errors returned by graph lookups and graph algorithms
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// No edge is stored between the two nodes
    #[error("edge not found")]
    EdgeNotFound,

    /// A node passed to an algorithm is not part of the graph
    #[error("node not found")]
    NodeNotFound,

    /// Topological sort found a cycle
    #[error("cycle detected: {nodes} node(s) cannot be ordered")]
    CycleDetected {
        /// Length of the cycle found by the search, or, when no node without
        /// predecessors leads into a cycle, the number of nodes left unordered
        nodes: usize,
    },

    /// The supplied queue rejected an operation
    #[error("queue operation failed: {0}")]
    Queue(#[from] QueueError),
}

impl GraphError {
    /// Creates a cycle detected error
    pub fn cycle(nodes: usize) -> Self {
        Self::CycleDetected { nodes }
    }
}
