use crate::{Error, Result};

/// Sample sizes of the reference study, up to the full network (3285 stops)
pub const DEFAULT_SIZES: [usize; 8] = [100, 500, 1000, 1500, 2000, 2500, 3000, 3285];

/// How the harness picks the source vertex of each sampled subgraph
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceSelection<V> {
    /// Uniformly among subgraph vertices with outgoing edges, falling back to any
    /// subgraph vertex
    #[default]
    Random,
    /// Always this vertex; sizes whose sample does not contain it are skipped
    Fixed(V),
}

/// Configuration for [`crate::BenchmarkHarness`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig<V> {
    /// Requested subgraph sizes, in run order
    pub sizes: Vec<usize>,
    /// Seed for sampling and source choice; `None` draws one from the OS
    pub seed: Option<u64>,
    pub source: SourceSelection<V>,
    /// Runs per algorithm and sample; the fastest run is reported
    pub repetitions: usize,
}

impl<V> Default for BenchmarkConfig<V> {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
            source: SourceSelection::Random,
            repetitions: 1,
        }
    }
}

impl<V> BenchmarkConfig<V> {
    /// Set the subgraph sizes to sample
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Set the RNG seed, making the run reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the source selection policy
    pub fn with_source(mut self, source: SourceSelection<V>) -> Self {
        self.source = source;
        self
    }

    /// Set the number of timed runs per algorithm and sample
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Checks that the configuration can run
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
