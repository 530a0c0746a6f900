use std::env;

use colored::Colorize;
use transit_sssp::benchmark::{BenchmarkConfig, BenchmarkHarness, BenchmarkReport};
use transit_sssp::graph::{generate_transit_network, TransitNetworkConfig};

const USAGE: &str = "usage: benchmark [stop_count] [route_count] [seed] [--json]";

fn print_table(report: &BenchmarkReport<String>) {
    let algorithms = report.algorithms();

    print!("{:<10} | {:<8}", "Vertices", "Edges");
    for name in &algorithms {
        print!(" | {:>26}", name);
    }
    println!();
    println!("{}", "-".repeat(22 + 29 * algorithms.len()));

    for sample in &report.samples {
        let fastest = sample.fastest().map(|t| t.algorithm.as_str());
        print!("{:<10} | {:<8}", sample.vertex_count, sample.edge_count);
        for timing in &sample.timings {
            let cell = format!("{:>25.4}s", timing.seconds);
            if Some(timing.algorithm.as_str()) == fastest {
                print!(" | {}", cell.green().bold());
            } else {
                print!(" | {}", cell);
            }
        }
        println!();
    }

    for size in &report.skipped_sizes {
        println!("{}", format!("size {} skipped: no usable source", size).yellow());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let mut network = TransitNetworkConfig::default();
    if let Some(stops) = positional.first() {
        network.stop_count = stops.parse()?;
    }
    if let Some(routes) = positional.get(1) {
        network.route_count = routes.parse()?;
    }
    let seed: u64 = match positional.get(2) {
        Some(seed) => seed.parse()?,
        None => 42,
    };
    network.seed = seed;

    let graph = generate_transit_network(&network)?;
    log::info!(
        "Generated network: {} stops, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let sizes: Vec<usize> = transit_sssp::benchmark::DEFAULT_SIZES
        .iter()
        .copied()
        .filter(|&size| size < graph.vertex_count())
        .chain(std::iter::once(graph.vertex_count()))
        .collect();

    let config = BenchmarkConfig::default().with_sizes(sizes).with_seed(seed);
    let harness = BenchmarkHarness::new(config)?;
    let report = harness.run(&graph)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", "Bellman-Ford vs Dijkstra (binary heap) vs Dijkstra (Fibonacci heap)".bold());
        println!(
            "Network: {} stops, {} edges, seed {}\n",
            graph.vertex_count(),
            graph.edge_count(),
            seed
        );
        print_table(&report);
    }

    Ok(())
}
