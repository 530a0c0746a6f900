pub mod traits;
pub mod directed;
pub mod transit;
pub mod generators;

pub use traits::{Vertex, Weight};
pub use directed::DirectedGraph;
pub use transit::{graph_from_stop_times, parse_clock_time, StopTime};
pub use generators::{generate_transit_network, TransitNetworkConfig};
