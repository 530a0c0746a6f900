use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DirectedGraph, Vertex, Weight};
use crate::Result;

/// Bellman-Ford: repeated relaxation of every edge.
///
/// Runs |V| - 1 full passes over the edges, then one extra scan; an edge that can
/// still be relaxed proves a negative cycle reachable from the source. O(V * E).
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

/// Candidate distance through an edge, if `from` is reached and the sum fits
fn relaxed<W: Weight>(from: Option<W>, weight: W) -> Option<W> {
    from.and_then(|distance| distance.add_checked(weight))
}

fn improves<W: Weight>(current: Option<W>, candidate: W) -> bool {
    current.map_or(true, |current| candidate < current)
}

impl<V, W> ShortestPathAlgorithm<V, W> for BellmanFord
where
    V: Vertex,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<V, W>,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>> {
        let mut result = ShortestPathResult::unreached(graph, source);
        let passes = graph.vertex_count().saturating_sub(1);

        for _ in 0..passes {
            for (u, v, weight) in graph.edges() {
                let Some(candidate) = relaxed(result.distance(u), weight) else {
                    continue;
                };
                if improves(result.distance(v), candidate) {
                    result.distances.insert(v.clone(), Some(candidate));
                    result.predecessors.insert(v.clone(), Some(u.clone()));
                }
            }
        }

        result.negative_cycle = graph.edges().any(|(u, v, weight)| {
            relaxed(result.distance(u), weight)
                .map_or(false, |candidate| improves(result.distance(v), candidate))
        });

        if result.negative_cycle {
            log::warn!("Bellman-Ford: negative cycle reachable from {:?}", source);
        }
        log::debug!(
            "Bellman-Ford from {:?}: {} of {} vertices reached",
            source,
            result.reachable_count(),
            graph.vertex_count()
        );

        Ok(result)
    }
}
