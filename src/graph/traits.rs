use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{PrimInt, Signed};

/// Trait for vertex identifiers (stop ids, indices, ...)
///
/// Only equality and hashing are required; vertices are never ordered.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait for edge weights
///
/// Weights are exact signed integers so that distance arithmetic never loses
/// precision. Bellman-Ford accepts negative weights, Dijkstra requires them to be
/// non-negative.
pub trait Weight: PrimInt + Signed + Debug {
    /// Adds two weights, returning `None` on overflow
    fn add_checked(self, other: Self) -> Option<Self> {
        self.checked_add(&other)
    }
}

impl<T> Weight for T where T: PrimInt + Signed + Debug {}
