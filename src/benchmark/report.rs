use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wall-clock time of one algorithm on one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmTiming {
    pub algorithm: String,
    pub seconds: f64,
}

/// Timings of every algorithm on one sampled subgraph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleTiming<V> {
    /// Size asked for; larger than `vertex_count` when it exceeded the graph
    pub requested_size: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub source: V,
    pub timings: Vec<AlgorithmTiming>,
}

impl<V> SampleTiming<V> {
    /// Seconds taken by `algorithm` on this sample
    pub fn seconds(&self, algorithm: &str) -> Option<f64> {
        self.timings
            .iter()
            .find(|timing| timing.algorithm == algorithm)
            .map(|timing| timing.seconds)
    }

    /// The fastest algorithm on this sample
    pub fn fastest(&self) -> Option<&AlgorithmTiming> {
        self.timings
            .iter()
            .min_by(|a, b| a.seconds.total_cmp(&b.seconds))
    }
}

/// Result of a benchmark run, ready for reporting or plotting
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport<V> {
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
    pub samples: Vec<SampleTiming<V>>,
    /// Requested sizes that produced no usable source vertex
    pub skipped_sizes: Vec<usize>,
}

impl<V> BenchmarkReport<V> {
    /// Vertex counts of the timed samples, in run order
    pub fn sizes(&self) -> Vec<usize> {
        self.samples.iter().map(|sample| sample.vertex_count).collect()
    }

    /// Algorithm names in the order they were run
    pub fn algorithms(&self) -> Vec<&str> {
        self.samples
            .first()
            .map(|sample| sample.timings.iter().map(|t| t.algorithm.as_str()).collect())
            .unwrap_or_default()
    }

    /// Seconds of `algorithm` per sample, parallel to [`BenchmarkReport::sizes`]
    pub fn series(&self, algorithm: &str) -> Vec<f64> {
        self.samples
            .iter()
            .filter_map(|sample| sample.seconds(algorithm))
            .collect()
    }
}

impl<V: Serialize> BenchmarkReport<V> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
