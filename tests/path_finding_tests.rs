use std::cell::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use transit_sssp::algorithm::bellman_ford::BellmanFord;
use transit_sssp::algorithm::dijkstra::{BinaryHeapDijkstra, Dijkstra, FibonacciDijkstra};
use transit_sssp::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use transit_sssp::data_structures::PriorityQueue;
use transit_sssp::graph::{generate_transit_network, DirectedGraph, TransitNetworkConfig};

type Graph = DirectedGraph<String, i64>;

fn graph_of(edges: &[(&str, &str, i64)]) -> Graph {
    DirectedGraph::from_edges(
        edges
            .iter()
            .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
    )
}

fn s(vertex: &str) -> String {
    vertex.to_string()
}

// Runs the three algorithms from the same source
fn run_all(graph: &Graph, source: &str) -> Vec<(&'static str, ShortestPathResult<String, i64>)> {
    let source = s(source);
    let bellman_ford = BellmanFord::new();
    let binary = BinaryHeapDijkstra::<String, i64>::new();
    let fibonacci = FibonacciDijkstra::<String, i64>::new();

    vec![
        (
            ShortestPathAlgorithm::<String, i64>::name(&bellman_ford),
            bellman_ford.compute_shortest_paths(graph, &source).unwrap(),
        ),
        (binary.name(), binary.compute_shortest_paths(graph, &source).unwrap()),
        (fibonacci.name(), fibonacci.compute_shortest_paths(graph, &source).unwrap()),
    ]
}

// A predecessor must itself sit at the recorded minimal distance
fn assert_tree_consistent(graph: &Graph, result: &ShortestPathResult<String, i64>) {
    for (vertex, pred) in &result.predecessors {
        let Some(pred) = pred else { continue };
        let weight = graph
            .edge_weight(pred, vertex)
            .unwrap_or_else(|| panic!("predecessor edge {} -> {} missing", pred, vertex));
        assert_eq!(
            result.distance(vertex),
            result.distance(pred).map(|d| d + weight),
            "distance of {} does not go through its predecessor {}",
            vertex,
            pred
        );
    }
}

#[test]
fn test_three_stop_scenario() {
    let graph = graph_of(&[("A", "B", 5), ("B", "C", 2), ("A", "C", 9)]);

    for (name, result) in run_all(&graph, "A") {
        assert_eq!(result.distance(&s("A")), Some(0), "{}", name);
        assert_eq!(result.distance(&s("B")), Some(5), "{}", name);
        assert_eq!(result.distance(&s("C")), Some(7), "{}", name);

        assert_eq!(result.predecessor(&s("A")), None, "{}", name);
        assert_eq!(result.predecessor(&s("B")), Some(&s("A")), "{}", name);
        assert_eq!(result.predecessor(&s("C")), Some(&s("B")), "{}", name);
        assert!(!result.negative_cycle, "{}", name);
    }
}

#[test]
fn test_two_vertex_negative_cycle() {
    let graph = graph_of(&[("A", "B", 1), ("B", "A", -3)]);
    let result = BellmanFord::new().compute_shortest_paths(&graph, &s("A")).unwrap();
    assert!(result.negative_cycle);
}

#[test]
fn test_three_vertex_negative_cycle() {
    let graph = graph_of(&[("A", "B", -1), ("B", "C", -1), ("C", "A", 1)]);
    let result = BellmanFord::new().compute_shortest_paths(&graph, &s("A")).unwrap();
    assert!(result.negative_cycle);
}

#[test]
fn test_negative_edges_without_cycle() {
    let graph = graph_of(&[("A", "B", 4), ("A", "C", 2), ("C", "B", -3), ("B", "D", 1)]);
    let result = BellmanFord::new().compute_shortest_paths(&graph, &s("A")).unwrap();

    assert!(!result.negative_cycle);
    assert_eq!(result.distance(&s("B")), Some(-1));
    assert_eq!(result.distance(&s("D")), Some(0));
    assert_eq!(result.predecessor(&s("B")), Some(&s("C")));
}

#[test]
fn test_non_negative_graph_never_reports_cycle() {
    let graph = generate_transit_network(&TransitNetworkConfig {
        stop_count: 150,
        route_count: 12,
        stops_per_route: 15,
        seed: 3,
        ..TransitNetworkConfig::default()
    })
    .unwrap();
    let source = graph.vertices().next().unwrap().clone();
    let result = BellmanFord::new().compute_shortest_paths(&graph, &source).unwrap();
    assert!(!result.negative_cycle);
}

#[test]
fn test_empty_graph() {
    let graph = Graph::new();

    for (name, result) in run_all(&graph, "A") {
        assert_eq!(result.distances.len(), 1, "{}", name);
        assert_eq!(result.distance(&s("A")), Some(0), "{}", name);
        assert_eq!(result.reachable_count(), 1, "{}", name);
    }
}

#[test]
fn test_source_outside_graph_reaches_nothing() {
    let graph = graph_of(&[("A", "B", 5), ("B", "C", 2)]);

    for (name, result) in run_all(&graph, "Z") {
        assert_eq!(result.distance(&s("Z")), Some(0), "{}", name);
        for vertex in ["A", "B", "C"] {
            assert!(result.distances.contains_key(&s(vertex)), "{}", name);
            assert_eq!(result.distance(&s(vertex)), None, "{}", name);
        }
    }
}

#[test]
fn test_target_only_vertices_are_tracked() {
    // D never appears as an edge source; E is unreachable
    let graph = graph_of(&[("A", "D", 3), ("E", "A", 1)]);

    for (name, result) in run_all(&graph, "A") {
        assert_eq!(result.distance(&s("D")), Some(3), "{}", name);
        assert_eq!(result.predecessor(&s("D")), Some(&s("A")), "{}", name);
        assert!(result.distances.contains_key(&s("E")), "{}", name);
        assert!(!result.is_reachable(&s("E")), "{}", name);
    }
}

#[test]
fn test_parallel_edges_use_fastest_trip() {
    let mut graph = Graph::new();
    graph.add_edge(s("A"), s("B"), 300);
    graph.add_edge(s("A"), s("B"), 120);
    graph.add_edge(s("A"), s("B"), 240);

    for (name, result) in run_all(&graph, "A") {
        assert_eq!(result.distance(&s("B")), Some(120), "{}", name);
    }
}

#[test]
fn test_decrease_key_path_is_taken() {
    // C is first reached at 10, then improved to 3 through B
    let graph = graph_of(&[("A", "C", 10), ("A", "B", 1), ("B", "C", 2), ("C", "D", 1)]);

    for (name, result) in run_all(&graph, "A") {
        assert_eq!(result.distance(&s("C")), Some(3), "{}", name);
        assert_eq!(result.distance(&s("D")), Some(4), "{}", name);
        assert_eq!(result.predecessor(&s("C")), Some(&s("B")), "{}", name);
    }
}

#[test]
fn test_algorithms_agree_on_transit_networks() {
    for seed in 0..5 {
        let graph = generate_transit_network(&TransitNetworkConfig {
            stop_count: 300,
            route_count: 25,
            stops_per_route: 20,
            seed,
            ..TransitNetworkConfig::default()
        })
        .unwrap();
        let source = graph.vertices().nth(seed as usize).unwrap().clone();

        let results = run_all(&graph, &source);
        let (_, reference) = &results[0];
        for (name, result) in &results {
            assert_eq!(result.distances, reference.distances, "{} disagrees (seed {})", name, seed);
            assert_tree_consistent(&graph, result);
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = generate_transit_network(&TransitNetworkConfig {
        stop_count: 200,
        route_count: 15,
        stops_per_route: 20,
        seed: 9,
        ..TransitNetworkConfig::default()
    })
    .unwrap();
    let source = graph.vertices().next().unwrap().clone();

    let first = run_all(&graph, &source);
    let second = run_all(&graph, &source);
    for ((name, a), (_, b)) in first.iter().zip(second.iter()) {
        assert_eq!(a, b, "{} is not deterministic", name);
    }
}

// Grid with integer weights: 10 for straight moves, 14 for diagonals
fn create_test_grid(width: usize, height: usize) -> DirectedGraph<usize, i64> {
    let mut graph = DirectedGraph::new();

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let directions = [
                (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
                (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, cost);
                }
            }
        }
    }

    graph
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);
    let (source, target) = (0usize, 99usize);

    let binary = BinaryHeapDijkstra::<usize, i64>::new()
        .compute_shortest_paths(&graph, &source)
        .unwrap();
    let fibonacci = FibonacciDijkstra::<usize, i64>::new()
        .compute_shortest_paths(&graph, &source)
        .unwrap();
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, &source).unwrap();

    // Nine diagonal moves
    assert_eq!(binary.distance(&target), Some(126));
    assert_eq!(fibonacci.distance(&target), Some(126));
    assert_eq!(bellman_ford.distance(&target), Some(126));
    assert_eq!(binary.reachable_count(), 100);
}

thread_local! {
    static LAZY_POPS: Cell<usize> = Cell::new(0);
}

// Queue without decrease-key: every improvement is queued as a new entry
#[derive(Default)]
struct LazyQueue {
    entries: BinaryHeap<Reverse<(i64, String)>>,
}

impl PriorityQueue<String, i64> for LazyQueue {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, _item: &String) -> bool {
        false
    }

    fn push(&mut self, priority: i64, item: String) {
        self.entries.push(Reverse((priority, item)));
    }

    fn decrease_priority(&mut self, item: &String, priority: i64) -> transit_sssp::Result<()> {
        self.push(priority, item.clone());
        Ok(())
    }

    fn pop_min(&mut self) -> Option<(i64, String)> {
        let entry = self.entries.pop().map(|Reverse(entry)| entry);
        if entry.is_some() {
            LAZY_POPS.with(|pops| pops.set(pops.get() + 1));
        }
        entry
    }

    fn name(&self) -> &'static str {
        "lazy"
    }
}

#[test]
fn test_dijkstra_skips_stale_queue_entries() {
    // C is queued at 10, then again at 2 once B is settled
    let graph = graph_of(&[("A", "C", 10), ("A", "B", 1), ("B", "C", 1), ("C", "D", 3)]);
    let lazy = Dijkstra::<LazyQueue>::with_name("Dijkstra (lazy)");

    LAZY_POPS.with(|pops| pops.set(0));
    let result = lazy.compute_shortest_paths(&graph, &s("A")).unwrap();
    // A, B, C at 2, D, then the stale C at 10
    assert_eq!(LAZY_POPS.with(Cell::get), 5);

    let reference = BellmanFord::new().compute_shortest_paths(&graph, &s("A")).unwrap();
    assert_eq!(result.distances, reference.distances);
    assert_eq!(result.predecessor(&s("C")), Some(&s("B")));
    assert_eq!(result.predecessor(&s("D")), Some(&s("C")));
    assert_tree_consistent(&graph, &result);
}

#[test]
fn test_dijkstra_with_duplicate_entries_matches_bellman_ford() {
    let graph = generate_transit_network(&TransitNetworkConfig {
        stop_count: 250,
        route_count: 20,
        stops_per_route: 20,
        seed: 21,
        ..TransitNetworkConfig::default()
    })
    .unwrap();
    let source = graph.vertices().next().unwrap().clone();

    LAZY_POPS.with(|pops| pops.set(0));
    let lazy = Dijkstra::<LazyQueue>::with_name("Dijkstra (lazy)")
        .compute_shortest_paths(&graph, &source)
        .unwrap();
    let reference = BellmanFord::new().compute_shortest_paths(&graph, &source).unwrap();

    assert_eq!(lazy.distances, reference.distances);
    assert_tree_consistent(&graph, &lazy);
    assert!(LAZY_POPS.with(Cell::get) >= reference.reachable_count());
}
