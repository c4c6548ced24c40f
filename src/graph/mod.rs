//! Weighted graphs and queue-generic graph algorithms
//!
//! The graph contract is split the same way the queue contract is: a base
//! trait, [`WeightedGraph`], holding nodes and weighted edges, and two
//! extensions that add neighborhood queries and the algorithms built on them:
//!
//! - [`DirectedGraph`]: topological sort and Dijkstra's shortest paths
//! - [`UndirectedGraph`]: Prim's minimum spanning tree
//!
//! Algorithms take the priority queue they run on as an argument, so any
//! [`PriorityQueue`] implementation can drive them.
//!
//! # Node ordinals
//!
//! Algorithms number the nodes in the order [`WeightedGraph::nodes`] yields
//! them and key their queues on `(cost, ordinal)` pairs. Ties between equal
//! costs therefore resolve in node enumeration order (insertion order for the
//! adjacency-list graphs), and node types only need `Eq + Hash`, not `Ord`.
//!
//! # Example
//!
//! ```rust
//! use rust_heap_graphs::fibonacci::FibonacciHeap;
//! use rust_heap_graphs::graph::{AdjacencyListDigraph, DirectedGraph, WeightedGraph};
//! use rust_heap_graphs::PriorityQueue;
//!
//! let mut graph = AdjacencyListDigraph::new();
//! graph.add("a", "b", 1);
//! graph.add("b", "c", 2);
//! graph.add("a", "c", 4);
//!
//! let mut queue = FibonacciHeap::new();
//! let paths = graph.dijkstra(&mut queue, &["a"]).unwrap();
//! assert_eq!(paths.distances.get("c"), Some(&3));
//! assert_eq!(paths.path_to(&"c"), Some(vec!["a", "b", "c"]));
//! ```

pub mod adjacency;
pub mod algorithms;

pub use adjacency::{AdjacencyListDigraph, AdjacencyListGraph};

use crate::error::GraphResult;
use crate::traits::PriorityQueue;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as edge weights.
///
/// This requires the type to be orderable, copyable, hashable (weights end up
/// inside queue items) and support addition. `Default` supplies the zero
/// distance.
pub trait Weight: Ord + Copy + Hash + Add<Output = Self> + Default {}

impl<T> Weight for T where T: Ord + Copy + Hash + Add<Output = Self> + Default {}

/// A spanning-tree key: the weight of the best known connecting edge, or
/// infinity when a node has no connection to the tree yet.
///
/// Every finite cost orders before [`EdgeCost::Infinite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeCost<W> {
    /// Weight of the cheapest known edge into the tree
    Finite(W),
    /// No edge into the tree is known
    Infinite,
}

/// A graph of hashable nodes joined by weighted edges
pub trait WeightedGraph {
    /// Node identity
    type Node: Clone + Eq + Hash;
    /// Edge weight
    type Weight: Weight;

    /// Returns all nodes in the graph
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_;

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns all edges as `(u, v, weight)`
    ///
    /// Undirected graphs yield each edge once.
    fn edges(&self) -> impl Iterator<Item = (&Self::Node, &Self::Node, Self::Weight)> + '_;

    /// Adds the edge `(u, v)` with the given weight, adding missing nodes
    ///
    /// Adding an existing edge replaces its weight.
    fn add(&mut self, u: Self::Node, v: Self::Node, weight: Self::Weight);

    /// Returns the weight of the edge `(u, v)`
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound)
    /// if there is no such edge.
    fn weight(&self, u: &Self::Node, v: &Self::Node) -> GraphResult<Self::Weight>;
}

/// A weighted graph whose edges have a direction
pub trait DirectedGraph: WeightedGraph {
    /// Returns the nodes reached by edges starting at `u`
    fn next_nodes(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node> + '_;

    /// Returns the nodes with edges ending at `u`
    fn prev_nodes(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node> + '_;

    /// Orders the nodes so that every edge points forward
    ///
    /// See [`algorithms::topological_sort`].
    fn topological_sort(&self) -> GraphResult<Vec<Self::Node>> {
        algorithms::topological_sort(self)
    }

    /// Computes shortest distances from `sources` with the supplied queue
    ///
    /// See [`algorithms::dijkstra`].
    fn dijkstra<Q>(
        &self,
        queue: &mut Q,
        sources: &[Self::Node],
    ) -> GraphResult<ShortestPaths<Self::Node, Self::Weight>>
    where
        Q: PriorityQueue<(Self::Weight, usize)>,
    {
        algorithms::dijkstra(self, queue, sources)
    }
}

/// A weighted graph whose edges have no direction
pub trait UndirectedGraph: WeightedGraph {
    /// Returns the nodes sharing an edge with `u`
    fn adjacent_nodes(&self, u: &Self::Node) -> impl Iterator<Item = &Self::Node> + '_;

    /// Computes a minimum spanning tree with the supplied queue
    ///
    /// See [`algorithms::minimum_spanning_tree`].
    fn minimum_spanning_tree<Q>(
        &self,
        queue: &mut Q,
    ) -> GraphResult<SpanningTree<Self::Node, Self::Weight>>
    where
        Q: PriorityQueue<(EdgeCost<Self::Weight>, usize)>,
    {
        algorithms::minimum_spanning_tree(self, queue)
    }
}

/// Result of a shortest-path search
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W> {
    /// Shortest distance to every reached node
    pub distances: FxHashMap<N, W>,
    /// Previous node on a shortest path; `None` for the sources
    pub predecessors: FxHashMap<N, Option<N>>,
}

impl<N: Clone + Eq + Hash, W> ShortestPaths<N, W> {
    /// Reconstructs a shortest path from a source to `target` (inclusive)
    ///
    /// Returns `None` if `target` was not reached.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        let mut path = vec![target.clone()];
        let mut current = self.predecessors.get(target)?;

        while let Some(previous) = current {
            path.push(previous.clone());
            current = self.predecessors.get(previous)?;
        }

        path.reverse();
        Some(path)
    }
}

/// Result of a spanning-tree search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<N, W> {
    /// Tree edges as `(child, parent)`, in the order children were reached
    pub edges: Vec<(N, N)>,
    /// Sum of the tree edge weights
    pub weight: W,
}
