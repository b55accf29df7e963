use lazy_sssp::graph::generators::generate_random;
use lazy_sssp::graph::{DirectedGraph, Graph};
use lazy_sssp::Dijkstra;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::env;
use std::time::{Duration, Instant};

/// One row of the benchmark report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    stale_discarded: usize,
    max_frontier_len: usize,
    single_ms: f64,
    batch_sources: usize,
    batch_ms: f64,
}

// Runs one query from vertex 0 and a parallel batch over several sources
fn benchmark_graph(
    engine: &Dijkstra,
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    batch_sources: usize,
) -> Result<BenchmarkRow, lazy_sssp::Error> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let result = engine.run(graph, 0)?;
    let single = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} ({} stale entries discarded)",
        result.reachable_count(),
        single,
        result.stats.stale_discarded
    );

    let sources: Vec<usize> = (0..batch_sources.min(graph.vertex_count())).collect();
    let start = Instant::now();
    let batch = engine.run_each(graph, &sources);
    let batch_time = start.elapsed();
    for outcome in batch {
        outcome?;
    }

    println!("  - Batch of {} sources in {:?}", sources.len(), batch_time);

    Ok(BenchmarkRow {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        reachable: result.reachable_count(),
        stale_discarded: result.stats.stale_discarded,
        max_frontier_len: result.stats.max_frontier_len,
        single_ms: millis(single),
        batch_sources: sources.len(),
        batch_ms: millis(batch_time),
    })
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [vertices] [edge_factor] [seed]
    let args: Vec<String> = env::args().collect();
    let vertices: Option<usize> = args.get(1).and_then(|a| a.parse().ok());
    let edge_factor: f64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(2.0);
    let seed: u64 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(42);

    // A single size when given, otherwise the default sweep
    let graph_sizes = match vertices {
        Some(n) => vec![n],
        None => vec![1_000, 10_000, 50_000, 100_000],
    };
    let batch_sources = 8;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with lazy deletion");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let engine = Dijkstra::new();
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, seed)?;
        rows.push(benchmark_graph(&engine, &graph, batch_sources)?);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<12} | {:<12}",
        "Vertices", "Edges", "Reachable", "Single (ms)", "Batch (ms)"
    );
    println!("-----------------------------------------------------");

    for row in &rows {
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12.2} | {:<12.2}",
            row.vertices, row.edges, row.reachable, row.single_ms, row.batch_ms
        );
    }

    println!("\n{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
