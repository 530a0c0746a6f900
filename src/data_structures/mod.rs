pub mod priority_queue;
pub mod binary_heap;
pub mod fibonacci_heap;

pub use priority_queue::PriorityQueue;
pub use binary_heap::IndexedBinaryHeap;
pub use fibonacci_heap::{FibonacciHeap, NodeHandle};
