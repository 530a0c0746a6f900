pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
