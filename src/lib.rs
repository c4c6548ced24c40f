//! Item-keyed priority queues and the graph algorithms built on them
//!
//! This crate provides two interchangeable min-priority queues that share one
//! contract, [`PriorityQueue`], including a `decrease_key` operation, and
//! weighted-graph algorithms written once against that contract.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) add, pop and decrease_key; O(1) peek and membership
//! - **Fibonacci Heap**: O(1) amortized add and decrease_key; O(log n) amortized pop
//! - **Graphs**: adjacency-list directed and undirected graphs with topological
//!   sort, Dijkstra's shortest paths and Prim's minimum spanning tree, each
//!   driven by whichever queue the caller passes in
//!
//! # Example
//!
//! ```rust
//! use rust_heap_graphs::binary_heap::BinaryHeap;
//! use rust_heap_graphs::graph::{AdjacencyListGraph, UndirectedGraph, WeightedGraph};
//! use rust_heap_graphs::PriorityQueue;
//!
//! let mut graph = AdjacencyListGraph::new();
//! graph.add("a", "b", 1);
//! graph.add("b", "c", 2);
//! graph.add("a", "c", 3);
//!
//! let mut queue = BinaryHeap::new();
//! let tree = graph.minimum_spanning_tree(&mut queue).unwrap();
//! assert_eq!(tree.weight, 3);
//! assert_eq!(tree.edges.len(), 2);
//! ```

pub mod binary_heap;
pub mod error;
pub mod fibonacci;
pub mod graph;
pub mod traits;

// Re-export the main trait and error types for convenience
pub use error::{GraphError, GraphResult, QueueError};
pub use traits::PriorityQueue;
