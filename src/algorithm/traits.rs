use std::collections::HashMap;

use crate::graph::{DirectedGraph, Vertex, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Distances from source to each vertex; `None` means unreached
    pub distances: HashMap<V, Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: HashMap<V, Option<V>>,

    /// Source vertex ID
    pub source: V,

    /// Set by Bellman-Ford when a negative cycle is reachable from the source.
    /// The distances are meaningless in that case.
    pub negative_cycle: bool,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Tables for a run that has not relaxed anything yet: every vertex of the graph
    /// unreached, the source at distance zero.
    ///
    /// The source is recorded even if the graph does not contain it.
    pub fn unreached(graph: &DirectedGraph<V, W>, source: &V) -> Self {
        let mut distances = HashMap::with_capacity(graph.vertex_count() + 1);
        let mut predecessors = HashMap::with_capacity(graph.vertex_count() + 1);
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), None);
            predecessors.insert(vertex.clone(), None);
        }
        distances.insert(source.clone(), Some(W::zero()));
        predecessors.insert(source.clone(), None);

        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            negative_cycle: false,
        }
    }

    /// Distance to `vertex`, or `None` if it is unreached or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` in the shortest path tree
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<V, W>,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
