//! Graph algorithms generic over the graph and the priority queue
//!
//! Each algorithm numbers the graph's nodes once (see the
//! [module docs](super#node-ordinals)) and works on ordinals internally, so
//! per-node bookkeeping lives in plain vectors.

use super::{DirectedGraph, EdgeCost, ShortestPaths, SpanningTree, UndirectedGraph, WeightedGraph};
use crate::error::{GraphError, GraphResult};
use crate::traits::PriorityQueue;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Nodes of `graph` in enumeration order, and the inverse lookup
struct Ordinals<'g, N> {
    nodes: Vec<&'g N>,
    index: FxHashMap<&'g N, usize>,
}

impl<'g, N: Eq + std::hash::Hash> Ordinals<'g, N> {
    fn new<G>(graph: &'g G) -> Self
    where
        G: WeightedGraph<Node = N> + ?Sized,
    {
        let nodes: Vec<&N> = graph.nodes().collect();
        let index = nodes.iter().enumerate().map(|(i, &node)| (node, i)).collect();
        Self { nodes, index }
    }

    fn of(&self, node: &N) -> GraphResult<usize> {
        self.index.get(node).copied().ok_or(GraphError::NodeNotFound)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Orders the nodes of a directed graph so that every edge points forward
///
/// Runs a depth-first search from every node without predecessors, in node
/// enumeration order, and returns the reversed post-order. The search keeps
/// its own stack, so deep graphs cannot overflow the call stack.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] if the graph has a cycle, whether or
/// not the cycle is reachable from a node without predecessors. A reachable
/// cycle is reported with its length; otherwise the error counts the nodes
/// left unordered.
pub fn topological_sort<G>(graph: &G) -> GraphResult<Vec<G::Node>>
where
    G: DirectedGraph + ?Sized,
{
    let ordinals = Ordinals::new(graph);
    let mut state = vec![Visit::New; ordinals.len()];
    let mut post_order = Vec::with_capacity(ordinals.len());

    for (start, &node) in ordinals.nodes.iter().enumerate() {
        if graph.prev_nodes(node).next().is_some() {
            continue;
        }

        state[start] = Visit::OnPath;
        let mut stack = vec![(start, graph.next_nodes(node))];

        while let Some((current, successors)) = stack.last_mut() {
            match successors.next() {
                Some(next) => {
                    let next_ordinal = ordinals.of(next)?;
                    match state[next_ordinal] {
                        Visit::New => {
                            state[next_ordinal] = Visit::OnPath;
                            stack.push((next_ordinal, graph.next_nodes(next)));
                        }
                        Visit::OnPath => {
                            // The cycle is the path suffix starting at `next`
                            let length = stack
                                .iter()
                                .rposition(|(ordinal, _)| *ordinal == next_ordinal)
                                .map_or(stack.len(), |start| stack.len() - start);
                            warn!(length, "topological sort found a back edge");
                            return Err(GraphError::cycle(length));
                        }
                        Visit::Done => {}
                    }
                }
                None => {
                    let finished = *current;
                    state[finished] = Visit::Done;
                    post_order.push(finished);
                    stack.pop();
                }
            }
        }
    }

    if post_order.len() < ordinals.len() {
        let unordered = ordinals.len() - post_order.len();
        warn!(unordered, "topological sort left nodes on a cycle");
        return Err(GraphError::cycle(unordered));
    }

    debug!(nodes = post_order.len(), "topological sort finished");
    Ok(post_order
        .into_iter()
        .rev()
        .map(|i| ordinals.nodes[i].clone())
        .collect())
}

/// Runs Dijkstra's algorithm from every node in `sources` at once
///
/// The queue is keyed on `(distance, ordinal)`; it should be empty on entry
/// and is drained on success. Nodes are added to the queue when first reached
/// and moved with `decrease_key` when a shorter path turns up, so each node
/// is in the queue at most once.
///
/// Edge weights must be non-negative.
///
/// # Errors
/// - [`GraphError::NodeNotFound`] if a source is not in the graph (checked
///   before the queue is touched)
/// - [`GraphError::Queue`] if the queue rejects an operation, which happens
///   when a negative edge tries to improve a node that was already settled
pub fn dijkstra<G, Q>(
    graph: &G,
    queue: &mut Q,
    sources: &[G::Node],
) -> GraphResult<ShortestPaths<G::Node, G::Weight>>
where
    G: DirectedGraph + ?Sized,
    Q: PriorityQueue<(G::Weight, usize)>,
{
    let ordinals = Ordinals::new(graph);
    let source_ordinals = sources
        .iter()
        .map(|source| ordinals.of(source))
        .collect::<GraphResult<Vec<_>>>()?;

    let zero = G::Weight::default();
    let mut distance: Vec<Option<G::Weight>> = vec![None; ordinals.len()];
    let mut previous: Vec<Option<usize>> = vec![None; ordinals.len()];

    for source in source_ordinals {
        distance[source] = Some(zero);
        queue.add((zero, source));
    }

    let mut settled = 0usize;
    while !queue.is_empty() {
        let (d, u) = queue.pop()?;
        settled += 1;
        let node = ordinals.nodes[u];

        for next in graph.next_nodes(node) {
            let v = ordinals.of(next)?;
            let candidate = d + graph.weight(node, next)?;

            match distance[v] {
                None => queue.add((candidate, v)),
                Some(known) if candidate < known => {
                    queue.decrease_key(&(known, v), (candidate, v))?;
                }
                Some(_) => continue,
            }
            distance[v] = Some(candidate);
            previous[v] = Some(u);
        }
    }

    debug!(settled, "dijkstra finished");

    let mut distances = FxHashMap::default();
    let mut predecessors = FxHashMap::default();
    for (i, &node) in ordinals.nodes.iter().enumerate() {
        if let Some(d) = distance[i] {
            distances.insert(node.clone(), d);
            predecessors.insert(node.clone(), previous[i].map(|p| ordinals.nodes[p].clone()));
        }
    }

    Ok(ShortestPaths {
        distances,
        predecessors,
    })
}

/// Runs Prim's algorithm, returning the tree edges and their total weight
///
/// The first node in enumeration order starts at cost zero and every other
/// node at [`EdgeCost::Infinite`]. The queue should be empty on entry and is
/// drained on success.
///
/// A disconnected graph yields a minimum spanning forest: when the cheapest
/// node left has infinite cost it starts a new tree without a parent edge.
///
/// # Errors
/// Returns [`GraphError::Queue`] if the queue rejects an operation.
pub fn minimum_spanning_tree<G, Q>(
    graph: &G,
    queue: &mut Q,
) -> GraphResult<SpanningTree<G::Node, G::Weight>>
where
    G: UndirectedGraph + ?Sized,
    Q: PriorityQueue<(EdgeCost<G::Weight>, usize)>,
{
    let ordinals = Ordinals::new(graph);
    let zero = G::Weight::default();

    // `None` once a node has left the frontier
    let mut frontier: Vec<Option<EdgeCost<G::Weight>>> =
        vec![Some(EdgeCost::Infinite); ordinals.len()];
    let mut connected: Vec<Option<usize>> = vec![None; ordinals.len()];

    if let Some(first) = frontier.first_mut() {
        *first = Some(EdgeCost::Finite(zero));
    }
    for (i, cost) in frontier.iter().enumerate() {
        if let Some(cost) = cost {
            queue.add((*cost, i));
        }
    }

    let mut edges = Vec::with_capacity(ordinals.len().saturating_sub(1));
    let mut total = zero;

    while !queue.is_empty() {
        let (cost, u) = queue.pop()?;
        frontier[u] = None;
        let node = ordinals.nodes[u];

        if let (Some(parent), EdgeCost::Finite(w)) = (connected[u], cost) {
            edges.push((node.clone(), ordinals.nodes[parent].clone()));
            total = total + w;
        }

        for adjacent in graph.adjacent_nodes(node) {
            let v = ordinals.of(adjacent)?;
            let Some(known) = frontier[v] else {
                continue;
            };
            let offered = EdgeCost::Finite(graph.weight(node, adjacent)?);
            if offered < known {
                queue.decrease_key(&(known, v), (offered, v))?;
                frontier[v] = Some(offered);
                connected[v] = Some(u);
            }
        }
    }

    debug!(edges = edges.len(), "minimum spanning tree finished");
    Ok(SpanningTree {
        edges,
        weight: total,
    })
}
