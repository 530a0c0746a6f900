use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::{BinaryHeapDijkstra, FibonacciDijkstra};
use crate::algorithm::ShortestPathAlgorithm;
use crate::benchmark::config::{BenchmarkConfig, SourceSelection};
use crate::benchmark::report::{AlgorithmTiming, BenchmarkReport, SampleTiming};
use crate::graph::{DirectedGraph, Vertex, Weight};
use crate::Result;

/// Times Bellman-Ford and both Dijkstra variants on vertex-induced samples of a graph.
///
/// Every requested size gets its own independent sample. The harness only measures;
/// it does not compare the distances the algorithms report.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness<V> {
    config: BenchmarkConfig<V>,
}

impl<V: Vertex> BenchmarkHarness<V> {
    pub fn new(config: BenchmarkConfig<V>) -> Result<Self> {
        config.validate()?;
        Ok(BenchmarkHarness { config })
    }

    pub fn config(&self) -> &BenchmarkConfig<V> {
        &self.config
    }

    /// Samples each configured size from `graph` and times all algorithms on it
    pub fn run<W: Weight>(&self, graph: &DirectedGraph<V, W>) -> Result<BenchmarkReport<V>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut samples = Vec::with_capacity(self.config.sizes.len());
        let mut skipped_sizes = Vec::new();

        for &size in &self.config.sizes {
            let subgraph = graph.sample_induced(size, &mut rng);
            let Some(source) = self.choose_source(&subgraph, &mut rng) else {
                log::warn!("No usable source vertex in sample of size {}, skipping", size);
                skipped_sizes.push(size);
                continue;
            };

            let sample = self.run_on(&subgraph, &source, size)?;
            log::info!(
                "Sample {} ({} vertices, {} edges) from {:?}: {}",
                size,
                sample.vertex_count,
                sample.edge_count,
                source,
                sample
                    .timings
                    .iter()
                    .map(|t| format!("{} {:.4}s", t.algorithm, t.seconds))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            samples.push(sample);
        }

        Ok(BenchmarkReport {
            seed: self.config.seed,
            generated_at: Utc::now(),
            samples,
            skipped_sizes,
        })
    }

    /// Times all algorithms on `graph` itself from `source`
    pub fn run_on<W: Weight>(
        &self,
        graph: &DirectedGraph<V, W>,
        source: &V,
        requested_size: usize,
    ) -> Result<SampleTiming<V>> {
        let repetitions = self.config.repetitions;
        let timings = vec![
            time_algorithm(&BellmanFord::new(), graph, source, repetitions)?,
            time_algorithm(&BinaryHeapDijkstra::<V, W>::new(), graph, source, repetitions)?,
            time_algorithm(&FibonacciDijkstra::<V, W>::new(), graph, source, repetitions)?,
        ];

        Ok(SampleTiming {
            requested_size,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            source: source.clone(),
            timings,
        })
    }

    fn choose_source<W: Weight, R: Rng + ?Sized>(
        &self,
        graph: &DirectedGraph<V, W>,
        rng: &mut R,
    ) -> Option<V> {
        match &self.config.source {
            SourceSelection::Fixed(vertex) => graph.has_vertex(vertex).then(|| vertex.clone()),
            SourceSelection::Random => {
                let with_edges: Vec<&V> =
                    graph.vertices().filter(|v| graph.out_degree(v) > 0).collect();
                if with_edges.is_empty() {
                    let all: Vec<&V> = graph.vertices().collect();
                    all.choose(rng).map(|v| (*v).clone())
                } else {
                    with_edges.choose(rng).map(|v| (*v).clone())
                }
            }
        }
    }
}

/// Runs `algorithm` `repetitions` times and keeps the fastest wall-clock time
fn time_algorithm<V, W, A>(
    algorithm: &A,
    graph: &DirectedGraph<V, W>,
    source: &V,
    repetitions: usize,
) -> Result<AlgorithmTiming>
where
    V: Vertex,
    W: Weight,
    A: ShortestPathAlgorithm<V, W>,
{
    let mut best = f64::INFINITY;
    for _ in 0..repetitions.max(1) {
        let start = Instant::now();
        let result = algorithm.compute_shortest_paths(graph, source)?;
        let elapsed = start.elapsed().as_secs_f64();
        drop(result);
        best = best.min(elapsed);
    }

    Ok(AlgorithmTiming {
        algorithm: algorithm.name().to_string(),
        seconds: best,
    })
}
