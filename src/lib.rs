//! Transit SSSP - shortest paths over transit-schedule graphs
//!
//! This library compares three single-source shortest path algorithms on weighted
//! directed graphs built from transit timetables (edge weights are travel times in
//! seconds):
//!
//! - Bellman-Ford, which tolerates negative edges and detects negative cycles
//! - Dijkstra driven by an indexed binary min-heap
//! - Dijkstra driven by a Fibonacci heap
//!
//! A benchmark harness samples vertex-induced subgraphs of increasing size and
//! times each algorithm on them.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::{BinaryHeapDijkstra, Dijkstra, FibonacciDijkstra},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use benchmark::{BenchmarkConfig, BenchmarkHarness, BenchmarkReport, SourceSelection};
pub use data_structures::{FibonacciHeap, IndexedBinaryHeap, NodeHandle, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid heap operation: {0}")]
    InvalidOperation(String),

    #[error("Heap handle no longer refers to a live node (slot {0})")]
    InvalidHandle(usize),

    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
