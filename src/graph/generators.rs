use crate::graph::DirectedGraph;
use crate::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Parameters for a synthetic transit network
#[derive(Debug, Clone)]
pub struct TransitNetworkConfig {
    /// Number of distinct stops routes can visit
    pub stop_count: usize,
    /// Number of routes laid over the stops
    pub route_count: usize,
    /// Stops visited by each route
    pub stops_per_route: usize,
    /// Inclusive range of travel times between consecutive stops, in seconds
    pub travel_time: (i64, i64),
    /// Whether each route also runs in the opposite direction
    pub bidirectional: bool,
    /// RNG seed; the same seed always produces the same network
    pub seed: u64,
}

impl Default for TransitNetworkConfig {
    fn default() -> Self {
        TransitNetworkConfig {
            stop_count: 3285,
            route_count: 120,
            stops_per_route: 40,
            travel_time: (30, 600),
            bidirectional: true,
            seed: 42,
        }
    }
}

/// Identifier used for the `index`-th generated stop
pub fn stop_id(index: usize) -> String {
    format!("STOP{:05}", index)
}

/// Generates a transit-like network: each route is a chain over randomly chosen stops.
///
/// Routes sharing a pair of consecutive stops produce parallel edges, which the graph
/// collapses to the fastest travel time, as with real timetables.
///
/// Fails with [`Error::InvalidConfig`] when there are no stops or the travel time
/// range is empty or not strictly positive.
pub fn generate_transit_network(config: &TransitNetworkConfig) -> Result<DirectedGraph<String, i64>> {
    if config.stop_count == 0 {
        return Err(Error::InvalidConfig("stop_count must be positive".to_string()));
    }
    let (min_time, max_time) = config.travel_time;
    if min_time <= 0 || min_time > max_time {
        return Err(Error::InvalidConfig(format!(
            "travel time range {}..={} must be positive and non-empty",
            min_time, max_time
        )));
    }

    let mut graph = DirectedGraph::with_capacity(config.stop_count);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let stops_per_route = config.stops_per_route.min(config.stop_count);

    for _ in 0..config.route_count {
        let route: Vec<usize> =
            rand::seq::index::sample(&mut rng, config.stop_count, stops_per_route).into_vec();

        for pair in route.windows(2) {
            let weight = rng.gen_range(min_time..=max_time);
            graph.add_edge(stop_id(pair[0]), stop_id(pair[1]), weight);

            if config.bidirectional {
                // Return trips are rarely scheduled identically
                let back = (weight + rng.gen_range(-15..=15)).clamp(min_time, max_time);
                graph.add_edge(stop_id(pair[1]), stop_id(pair[0]), back);
            }
        }
    }

    Ok(graph)
}
