//! Adjacency-list graph storage
//!
//! Both graphs give every node a dense ordinal on first sight and store
//! neighbor lists and weights by ordinal. Nodes and neighbors are reported in
//! insertion order, which keeps every algorithm run reproducible.

use super::{DirectedGraph, UndirectedGraph, Weight, WeightedGraph};
use crate::error::{GraphError, GraphResult};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Insertion-ordered node set shared by both graph kinds
#[derive(Debug, Clone)]
struct NodeSet<N> {
    nodes: Vec<N>,
    ordinals: FxHashMap<N, usize>,
}

impl<N: Clone + Eq + Hash> NodeSet<N> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ordinals: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the ordinal of `node` and whether it was just added
    fn insert(&mut self, node: N) -> (usize, bool) {
        if let Some(&ordinal) = self.ordinals.get(&node) {
            return (ordinal, false);
        }
        let ordinal = self.nodes.len();
        self.ordinals.insert(node.clone(), ordinal);
        self.nodes.push(node);
        (ordinal, true)
    }

    fn get(&self, node: &N) -> Option<usize> {
        self.ordinals.get(node).copied()
    }

    fn edge(&self, u: &N, v: &N) -> GraphResult<(usize, usize)> {
        match (self.get(u), self.get(v)) {
            (Some(u), Some(v)) => Ok((u, v)),
            _ => Err(GraphError::EdgeNotFound),
        }
    }
}

fn neighbors<'a, N>(
    nodes: &'a NodeSet<N>,
    lists: &'a [Vec<usize>],
    ordinal: Option<usize>,
) -> impl Iterator<Item = &'a N> + 'a {
    ordinal
        .and_then(|i| lists.get(i))
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(move |&j| &nodes.nodes[j])
}

/// Directed graph with forward and backward adjacency lists
///
/// # Example
///
/// ```rust
/// use rust_heap_graphs::graph::{AdjacencyListDigraph, DirectedGraph, WeightedGraph};
///
/// let mut graph = AdjacencyListDigraph::new();
/// graph.add('a', 'b', 1);
/// graph.add('b', 'c', 1);
///
/// assert_eq!(graph.next_nodes(&'a').collect::<Vec<_>>(), vec![&'b']);
/// assert_eq!(graph.prev_nodes(&'c').collect::<Vec<_>>(), vec![&'b']);
/// assert_eq!(graph.topological_sort().unwrap(), vec!['a', 'b', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyListDigraph<N, W> {
    nodes: NodeSet<N>,
    next: Vec<Vec<usize>>,
    prev: Vec<Vec<usize>>,
    weights: FxHashMap<(usize, usize), W>,
}

impl<N: Clone + Eq + Hash, W: Weight> AdjacencyListDigraph<N, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: NodeSet::with_capacity(nodes),
            next: Vec::with_capacity(nodes),
            prev: Vec::with_capacity(nodes),
            weights: FxHashMap::default(),
        }
    }

    /// Adds a node without edges; does nothing if it is already present
    pub fn add_node(&mut self, node: N) {
        self.ordinal(node);
    }

    /// Returns true if `node` is in the graph
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.get(node).is_some()
    }

    fn ordinal(&mut self, node: N) -> usize {
        let (ordinal, added) = self.nodes.insert(node);
        if added {
            self.next.push(Vec::new());
            self.prev.push(Vec::new());
        }
        ordinal
    }
}

impl<N: Clone + Eq + Hash, W: Weight> Default for AdjacencyListDigraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash, W: Weight> WeightedGraph for AdjacencyListDigraph<N, W> {
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.nodes.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.nodes.len()
    }

    fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.next.iter().enumerate().flat_map(move |(u, successors)| {
            successors.iter().filter_map(move |&v| {
                let weight = *self.weights.get(&(u, v))?;
                Some((&self.nodes.nodes[u], &self.nodes.nodes[v], weight))
            })
        })
    }

    fn add(&mut self, u: N, v: N, weight: W) {
        let u = self.ordinal(u);
        let v = self.ordinal(v);
        if self.weights.insert((u, v), weight).is_none() {
            self.next[u].push(v);
            self.prev[v].push(u);
        }
    }

    fn weight(&self, u: &N, v: &N) -> GraphResult<W> {
        let key = self.nodes.edge(u, v)?;
        self.weights.get(&key).copied().ok_or(GraphError::EdgeNotFound)
    }
}

impl<N: Clone + Eq + Hash, W: Weight> DirectedGraph for AdjacencyListDigraph<N, W> {
    fn next_nodes(&self, u: &N) -> impl Iterator<Item = &N> + '_ {
        neighbors(&self.nodes, &self.next, self.nodes.get(u))
    }

    fn prev_nodes(&self, u: &N) -> impl Iterator<Item = &N> + '_ {
        neighbors(&self.nodes, &self.prev, self.nodes.get(u))
    }
}

/// Undirected graph with a symmetric adjacency list
///
/// Each edge's weight is stored once, under its endpoints' ordinals in
/// ascending order, so `weight(u, v)` and `weight(v, u)` always agree.
///
/// # Example
///
/// ```rust
/// use rust_heap_graphs::graph::{AdjacencyListGraph, UndirectedGraph, WeightedGraph};
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add("x", "y", 7);
///
/// assert_eq!(graph.weight(&"y", &"x"), Ok(7));
/// assert_eq!(graph.adjacent_nodes(&"y").collect::<Vec<_>>(), vec![&"x"]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<N, W> {
    nodes: NodeSet<N>,
    adjacent: Vec<Vec<usize>>,
    weights: FxHashMap<(usize, usize), W>,
}

/// Orders an edge's endpoints so each undirected edge has one key
fn canonical((u, v): (usize, usize)) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl<N: Clone + Eq + Hash, W: Weight> AdjacencyListGraph<N, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: NodeSet::with_capacity(nodes),
            adjacent: Vec::with_capacity(nodes),
            weights: FxHashMap::default(),
        }
    }

    /// Adds a node without edges; does nothing if it is already present
    pub fn add_node(&mut self, node: N) {
        self.ordinal(node);
    }

    /// Returns true if `node` is in the graph
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.get(node).is_some()
    }

    fn ordinal(&mut self, node: N) -> usize {
        let (ordinal, added) = self.nodes.insert(node);
        if added {
            self.adjacent.push(Vec::new());
        }
        ordinal
    }
}

impl<N: Clone + Eq + Hash, W: Weight> Default for AdjacencyListGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash, W: Weight> WeightedGraph for AdjacencyListGraph<N, W> {
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.nodes.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.nodes.len()
    }

    fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.adjacent.iter().enumerate().flat_map(move |(u, adjacent)| {
            adjacent.iter().filter(move |&&v| u <= v).filter_map(move |&v| {
                let weight = *self.weights.get(&(u, v))?;
                Some((&self.nodes.nodes[u], &self.nodes.nodes[v], weight))
            })
        })
    }

    fn add(&mut self, u: N, v: N, weight: W) {
        let u = self.ordinal(u);
        let v = self.ordinal(v);
        if self.weights.insert(canonical((u, v)), weight).is_none() {
            self.adjacent[u].push(v);
            if u != v {
                self.adjacent[v].push(u);
            }
        }
    }

    fn weight(&self, u: &N, v: &N) -> GraphResult<W> {
        let key = canonical(self.nodes.edge(u, v)?);
        self.weights.get(&key).copied().ok_or(GraphError::EdgeNotFound)
    }
}

impl<N: Clone + Eq + Hash, W: Weight> UndirectedGraph for AdjacencyListGraph<N, W> {
    fn adjacent_nodes(&self, u: &N) -> impl Iterator<Item = &N> + '_ {
        neighbors(&self.nodes, &self.adjacent, self.nodes.get(u))
    }
}
