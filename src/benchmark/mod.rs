pub mod config;
pub mod harness;
pub mod report;

pub use config::{BenchmarkConfig, SourceSelection, DEFAULT_SIZES};
pub use harness::BenchmarkHarness;
pub use report::{AlgorithmTiming, BenchmarkReport, SampleTiming};
