//! Tests for the graph algorithms
//!
//! Tests cover:
//! - Topological sort, including cycle detection
//! - Dijkstra with single and multiple sources, against both queues
//! - Prim's minimum spanning tree, including start-node independence
//!   and disconnected graphs

use rust_heap_graphs::binary_heap::BinaryHeap;
use rust_heap_graphs::fibonacci::FibonacciHeap;
use rust_heap_graphs::graph::{
    AdjacencyListDigraph, AdjacencyListGraph, DirectedGraph, EdgeCost, UndirectedGraph,
    WeightedGraph,
};
use rust_heap_graphs::{GraphError, PriorityQueue, QueueError};

// ============================================================================
// Fixtures
// ============================================================================

/// A→B(1), B→C(2), A→C(4), C→D(1)
fn small_digraph() -> AdjacencyListDigraph<&'static str, u32> {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("A", "B", 1);
    graph.add("B", "C", 2);
    graph.add("A", "C", 4);
    graph.add("C", "D", 1);
    graph
}

/// Diamond DAG: A→B→D, A→C→D
fn diamond() -> AdjacencyListDigraph<char, u32> {
    let mut graph = AdjacencyListDigraph::new();
    graph.add('A', 'B', 1);
    graph.add('A', 'C', 1);
    graph.add('B', 'D', 1);
    graph.add('C', 'D', 1);
    graph
}

/// A `width` x `height` grid with edges to the right and down, weighted so
/// that many tentative distances get improved later
fn grid(width: u32, height: u32) -> AdjacencyListDigraph<(u32, u32), u64> {
    let mut graph = AdjacencyListDigraph::with_capacity((width * height) as usize);
    for x in 0..width {
        for y in 0..height {
            if x + 1 < width {
                graph.add((x, y), (x + 1, y), u64::from((x * 7 + y * 3) % 10 + 1));
            }
            if y + 1 < height {
                graph.add((x, y), (x, y + 1), u64::from((x * 5 + y * 11) % 10 + 1));
            }
        }
    }
    graph
}

fn position<T: PartialEq>(order: &[T], item: &T) -> usize {
    order.iter().position(|x| x == item).unwrap()
}

// ============================================================================
// Topological sort
// ============================================================================

#[test]
fn test_topological_sort_diamond() {
    let order = diamond().topological_sort().unwrap();
    assert_eq!(order.len(), 4);

    let a = position(&order, &'A');
    let b = position(&order, &'B');
    let c = position(&order, &'C');
    let d = position(&order, &'D');
    assert!(a < b && a < c);
    assert!(b < d && c < d);
}

#[test]
fn test_topological_sort_respects_every_edge() {
    let graph = grid(6, 5);
    let order = graph.topological_sort().unwrap();
    assert_eq!(order.len(), graph.node_count());

    for (u, v, _) in graph.edges() {
        assert!(position(&order, u) < position(&order, v), "{:?} -> {:?}", u, v);
    }
}

#[test]
fn test_topological_sort_long_chain() {
    let mut graph = AdjacencyListDigraph::new();
    for i in 0..100_000u32 {
        graph.add(i, i + 1, 1u32);
    }
    let order = graph.topological_sort().unwrap();
    assert_eq!(order.len(), 100_001);
    assert_eq!(order.first(), Some(&0));
    assert_eq!(order.last(), Some(&100_000));
}

#[test]
fn test_topological_sort_detects_reachable_cycle() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("start", "a", 1u32);
    graph.add("a", "b", 1);
    graph.add("b", "c", 1);
    graph.add("c", "a", 1);

    // "start" leads into the cycle but is not part of it
    assert_eq!(
        graph.topological_sort(),
        Err(GraphError::CycleDetected { nodes: 3 })
    );
}

#[test]
fn test_topological_sort_reports_cycle_length_not_path_depth() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add(1, 2, 1u32);
    graph.add(2, 3, 1);
    graph.add(3, 4, 1);
    graph.add(4, 4, 1);

    assert_eq!(
        graph.topological_sort(),
        Err(GraphError::CycleDetected { nodes: 1 })
    );
}

#[test]
fn test_topological_sort_detects_cycle_without_sources() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add(1, 2, 1u32);
    graph.add(2, 1, 1);
    graph.add(3, 4, 1);

    assert_eq!(
        graph.topological_sort(),
        Err(GraphError::CycleDetected { nodes: 2 })
    );
}

#[test]
fn test_topological_sort_self_loop() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("x", "x", 1u32);
    assert!(graph.topological_sort().is_err());
}

#[test]
fn test_topological_sort_empty() {
    let graph: AdjacencyListDigraph<u8, u8> = AdjacencyListDigraph::new();
    assert_eq!(graph.topological_sort(), Ok(vec![]));
}

// ============================================================================
// Dijkstra
// ============================================================================

fn check_small_dijkstra<Q: PriorityQueue<(u32, usize)>>() {
    let graph = small_digraph();
    let mut queue = Q::new();
    let paths = graph.dijkstra(&mut queue, &["A"]).unwrap();
    assert!(queue.is_empty());

    assert_eq!(paths.distances.len(), 4);
    assert_eq!(paths.distances["A"], 0);
    assert_eq!(paths.distances["B"], 1);
    assert_eq!(paths.distances["C"], 3);
    assert_eq!(paths.distances["D"], 4);

    assert_eq!(paths.predecessors["A"], None);
    assert_eq!(paths.predecessors["B"], Some("A"));
    assert_eq!(paths.predecessors["C"], Some("B"));
    assert_eq!(paths.predecessors["D"], Some("C"));

    assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
}

#[test]
fn test_dijkstra_binary_heap() {
    check_small_dijkstra::<BinaryHeap<(u32, usize)>>();
}

#[test]
fn test_dijkstra_fibonacci_heap() {
    check_small_dijkstra::<FibonacciHeap<(u32, usize)>>();
}

#[test]
fn test_dijkstra_unreachable_nodes_are_absent() {
    let graph = small_digraph();
    let mut queue = BinaryHeap::new();
    let paths = graph.dijkstra(&mut queue, &["C"]).unwrap();

    assert_eq!(paths.distances.len(), 2);
    assert_eq!(paths.distances.get("A"), None);
    assert_eq!(paths.path_to(&"A"), None);
    assert_eq!(paths.path_to(&"C"), Some(vec!["C"]));
}

#[test]
fn test_dijkstra_multiple_sources() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("s1", "x", 10u32);
    graph.add("s2", "x", 3);
    graph.add("x", "y", 1);
    graph.add("s1", "y", 2);

    let mut queue = FibonacciHeap::new();
    let paths = graph.dijkstra(&mut queue, &["s1", "s2"]).unwrap();

    assert_eq!(paths.distances["s1"], 0);
    assert_eq!(paths.distances["s2"], 0);
    assert_eq!(paths.distances["x"], 3);
    assert_eq!(paths.distances["y"], 2);
    assert_eq!(paths.predecessors["x"], Some("s2"));
    assert_eq!(paths.predecessors["y"], Some("s1"));
    assert_eq!(paths.predecessors["s2"], None);
}

#[test]
fn test_dijkstra_unknown_source() {
    let graph = small_digraph();
    let mut queue = BinaryHeap::new();
    assert_eq!(
        graph.dijkstra(&mut queue, &["Z"]).unwrap_err(),
        GraphError::NodeNotFound
    );
    assert!(queue.is_empty());
}

#[test]
fn test_dijkstra_no_sources() {
    let graph = small_digraph();
    let mut queue = BinaryHeap::new();
    let paths = graph.dijkstra(&mut queue, &[]).unwrap();
    assert!(paths.distances.is_empty());
    assert!(paths.predecessors.is_empty());
}

#[test]
fn test_dijkstra_negative_edge_into_settled_node_fails() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("a", "b", 1i32);
    graph.add("a", "c", 5);
    graph.add("c", "b", -10);

    let mut queue = FibonacciHeap::new();
    assert_eq!(
        graph.dijkstra(&mut queue, &["a"]).unwrap_err(),
        GraphError::Queue(QueueError::NotFound)
    );
}

#[test]
fn test_dijkstra_queues_agree_on_grid() {
    let graph = grid(20, 15);

    let mut binary = BinaryHeap::new();
    let mut fibonacci = FibonacciHeap::new();
    let from_binary = graph.dijkstra(&mut binary, &[(0, 0)]).unwrap();
    let from_fibonacci = graph.dijkstra(&mut fibonacci, &[(0, 0)]).unwrap();

    assert_eq!(from_binary.distances, from_fibonacci.distances);
    assert_eq!(from_binary.predecessors, from_fibonacci.predecessors);
    assert_eq!(from_binary.distances.len(), 300);

    // Every recorded predecessor lies on a shortest path
    for (node, previous) in &from_binary.predecessors {
        if let Some(previous) = previous {
            let via = from_binary.distances[previous] + graph.weight(previous, node).unwrap();
            assert_eq!(via, from_binary.distances[node]);
        }
    }
}

#[test]
fn test_dijkstra_equal_distances_tie_break_by_insertion_order() {
    let mut graph = AdjacencyListDigraph::new();
    graph.add("s", "late", 1u32);
    graph.add("s", "early", 1);
    graph.add("late", "t", 1);
    graph.add("early", "t", 1);

    // "late" was inserted first, so it settles first and claims "t"
    let mut queue = BinaryHeap::new();
    let paths = graph.dijkstra(&mut queue, &["s"]).unwrap();
    assert_eq!(paths.predecessors["t"], Some("late"));
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

fn triangle(order: [(&'static str, &'static str, u32); 3]) -> AdjacencyListGraph<&'static str, u32> {
    let mut graph = AdjacencyListGraph::new();
    for (u, v, w) in order {
        graph.add(u, v, w);
    }
    graph
}

fn check_triangle_mst<Q: PriorityQueue<(EdgeCost<u32>, usize)>>() {
    let orders = [
        [("A", "B", 1), ("B", "C", 2), ("A", "C", 3)],
        [("B", "C", 2), ("A", "B", 1), ("A", "C", 3)],
        [("C", "A", 3), ("C", "B", 2), ("B", "A", 1)],
    ];

    for order in orders {
        let graph = triangle(order);
        let mut queue = Q::new();
        let tree = graph.minimum_spanning_tree(&mut queue).unwrap();
        assert!(queue.is_empty());

        assert_eq!(tree.weight, 3);
        assert_eq!(tree.edges.len(), 2);

        let mut edges: Vec<(&str, &str)> = tree
            .edges
            .iter()
            .map(|&(u, v)| if u < v { (u, v) } else { (v, u) })
            .collect();
        edges.sort();
        assert_eq!(edges, vec![("A", "B"), ("B", "C")]);
    }
}

#[test]
fn test_mst_binary_heap() {
    check_triangle_mst::<BinaryHeap<(EdgeCost<u32>, usize)>>();
}

#[test]
fn test_mst_fibonacci_heap() {
    check_triangle_mst::<FibonacciHeap<(EdgeCost<u32>, usize)>>();
}

#[test]
fn test_mst_larger_graph() {
    // Classic example with a unique minimum spanning tree of weight 37
    let mut graph = AdjacencyListGraph::new();
    for (u, v, w) in [
        (0, 1, 4u32),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 8, 2),
        (2, 5, 4),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ] {
        graph.add(u, v, w);
    }

    let mut binary = BinaryHeap::new();
    let mut fibonacci = FibonacciHeap::new();
    let from_binary = graph.minimum_spanning_tree(&mut binary).unwrap();
    let from_fibonacci = graph.minimum_spanning_tree(&mut fibonacci).unwrap();

    assert_eq!(from_binary.weight, 37);
    assert_eq!(from_binary.edges.len(), 8);
    assert_eq!(from_binary, from_fibonacci);

    let recomputed: u32 = from_binary
        .edges
        .iter()
        .map(|(child, parent)| graph.weight(child, parent).unwrap())
        .sum();
    assert_eq!(recomputed, 37);
}

#[test]
fn test_mst_disconnected_graph_yields_forest() {
    let mut graph = AdjacencyListGraph::new();
    graph.add('a', 'b', 5u32);
    graph.add('x', 'y', 2);
    graph.add('y', 'z', 3);
    graph.add('x', 'z', 9);

    let mut queue = FibonacciHeap::new();
    let forest = graph.minimum_spanning_tree(&mut queue).unwrap();
    assert_eq!(forest.edges.len(), 3);
    assert_eq!(forest.weight, 10);
}

#[test]
fn test_mst_single_node_and_empty() {
    let mut graph: AdjacencyListGraph<&str, u32> = AdjacencyListGraph::new();
    let mut queue = BinaryHeap::new();
    let tree = graph.minimum_spanning_tree(&mut queue).unwrap();
    assert!(tree.edges.is_empty());
    assert_eq!(tree.weight, 0);

    graph.add_node("only");
    let tree = graph.minimum_spanning_tree(&mut queue).unwrap();
    assert!(tree.edges.is_empty());
    assert!(queue.is_empty());
}
