//! Construction of travel-time graphs from GTFS-style stop times.
//!
//! Each trip visits its stops in `stop_sequence` order. Two consecutive stops `u`
//! and `v` of a trip yield an edge `u -> v` weighted by the scheduled travel time in
//! seconds (arrival at `v` minus departure from `u`). Only strictly positive travel
//! times are kept, and when several trips serve the same pair of stops the fastest
//! one wins.

use std::collections::HashMap;

use serde::Deserialize;

use crate::graph::directed::DirectedGraph;

/// Latest hour accepted in a clock time; service days run past midnight.
pub const MAX_SERVICE_HOUR: i64 = 30;

/// One row of a GTFS `stop_times.txt` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
    pub arrival_time: String,
    pub departure_time: String,
}

impl StopTime {
    pub fn new(
        trip_id: impl Into<String>,
        stop_id: impl Into<String>,
        stop_sequence: u32,
        arrival_time: impl Into<String>,
        departure_time: impl Into<String>,
    ) -> Self {
        StopTime {
            trip_id: trip_id.into(),
            stop_id: stop_id.into(),
            stop_sequence,
            arrival_time: arrival_time.into(),
            departure_time: departure_time.into(),
        }
    }
}

/// Converts `HH:MM:SS` into seconds since the start of the service day.
///
/// Returns `None` for malformed input, hours above [`MAX_SERVICE_HOUR`], or minutes
/// and seconds outside `0..60`.
pub fn parse_clock_time(time: &str) -> Option<i64> {
    let mut fields = time.trim().split(':');
    let hours: i64 = fields.next()?.trim().parse().ok()?;
    let minutes: i64 = fields.next()?.trim().parse().ok()?;
    let seconds: i64 = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    if !(0..=MAX_SERVICE_HOUR).contains(&hours)
        || !(0..60).contains(&minutes)
        || !(0..60).contains(&seconds)
    {
        return None;
    }

    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Builds the stop graph from stop-time records.
///
/// Records may arrive in any order. Pairs with unparsable times or a non-positive
/// travel time contribute no edge.
pub fn graph_from_stop_times<'a, I>(records: I) -> DirectedGraph<String, i64>
where
    I: IntoIterator<Item = &'a StopTime>,
{
    let mut trips: HashMap<&str, Vec<&StopTime>> = HashMap::new();
    let mut trip_order: Vec<&str> = Vec::new();
    for record in records {
        let stops = trips.entry(record.trip_id.as_str()).or_insert_with(|| {
            trip_order.push(record.trip_id.as_str());
            Vec::new()
        });
        stops.push(record);
    }

    let mut graph = DirectedGraph::new();
    let mut skipped = 0usize;

    for trip_id in trip_order {
        let Some(stops) = trips.get_mut(trip_id) else {
            continue;
        };
        stops.sort_by_key(|stop| stop.stop_sequence);

        for pair in stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let departure = parse_clock_time(&from.departure_time);
            let arrival = parse_clock_time(&to.arrival_time);

            match (departure, arrival) {
                (Some(departure), Some(arrival)) if arrival > departure => {
                    graph.add_edge(from.stop_id.clone(), to.stop_id.clone(), arrival - departure);
                }
                _ => skipped += 1,
            }
        }
    }

    log::info!(
        "Built transit graph: {} stops, {} edges ({} stop pairs skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        skipped
    );

    graph
}
