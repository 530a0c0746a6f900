use std::fmt;
use std::marker::PhantomData;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FibonacciHeap, IndexedBinaryHeap, PriorityQueue};
use crate::graph::{DirectedGraph, Vertex, Weight};
use crate::Result;

/// Dijkstra's algorithm over any [`PriorityQueue`] backend.
///
/// Edge weights must be non-negative; results on negative weights are undefined.
pub struct Dijkstra<Q> {
    name: &'static str,
    _queue: PhantomData<fn() -> Q>,
}

/// Dijkstra driven by [`IndexedBinaryHeap`]
pub type BinaryHeapDijkstra<V, W> = Dijkstra<IndexedBinaryHeap<V, W>>;

/// Dijkstra driven by [`FibonacciHeap`]
pub type FibonacciDijkstra<V, W> = Dijkstra<FibonacciHeap<W, V>>;

impl<Q> Dijkstra<Q> {
    /// Creates a Dijkstra instance reported under `name`
    pub fn with_name(name: &'static str) -> Self {
        Dijkstra {
            name,
            _queue: PhantomData,
        }
    }
}

impl<V: Vertex, W: Weight> Dijkstra<IndexedBinaryHeap<V, W>> {
    /// Creates the binary heap variant, reported as "Dijkstra (binary heap)"
    pub fn new() -> Self {
        Self::with_name("Dijkstra (binary heap)")
    }
}

impl<V: Vertex, W: Weight> Dijkstra<FibonacciHeap<W, V>> {
    /// Creates the Fibonacci heap variant, reported as "Dijkstra (Fibonacci heap)"
    pub fn new() -> Self {
        Self::with_name("Dijkstra (Fibonacci heap)")
    }
}

impl<Q> fmt::Debug for Dijkstra<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dijkstra").field("name", &self.name).finish()
    }
}

impl<Q> Clone for Dijkstra<Q> {
    fn clone(&self) -> Self {
        Self::with_name(self.name)
    }
}

impl<V, W, Q> ShortestPathAlgorithm<V, W> for Dijkstra<Q>
where
    V: Vertex,
    W: Weight,
    Q: PriorityQueue<V, W> + Default,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<V, W>,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>> {
        let mut result = ShortestPathResult::unreached(graph, source);

        let mut queue = Q::default();
        queue.push(W::zero(), source.clone());
        let mut settled = 0usize;

        // Main Dijkstra loop
        while let Some((dist_u, u)) = queue.pop_min() {
            // Stale entry: a shorter path to u was recorded after this one was queued
            if result.distance(&u).map_or(false, |current| current < dist_u) {
                continue;
            }
            settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                let Some(new_dist) = dist_u.add_checked(weight) else {
                    continue;
                };

                let should_update = match result.distance(v) {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    result.distances.insert(v.clone(), Some(new_dist));
                    result.predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push_or_decrease(v.clone(), new_dist)?;
                }
            }
        }

        log::debug!(
            "{} from {:?}: settled {} of {} vertices",
            self.name,
            source,
            settled,
            graph.vertex_count()
        );

        Ok(result)
    }
}
