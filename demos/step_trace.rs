use colored::*;
use lazy_sssp::algorithm::{Route, SettleStep};
use lazy_sssp::{Dijkstra, DirectedGraph};

// Prints the distance table after one settle step
fn print_step(step: &SettleStep<'_, &str, u32>) {
    println!(
        "\n{} {}",
        format!("Step {}:", step.index).bright_white().bold(),
        format!("settled {}", step.vertex).bright_cyan().bold()
    );
    println!("{:<8} | {:>8} | {}", "Vertex", "Distance", "Settled");

    let mut rows: Vec<(&&str, &u32)> = step.distances.iter().collect();
    rows.sort();
    for (vertex, distance) in rows {
        let settled = if step.is_settled(vertex) {
            "yes".bright_green()
        } else {
            "no".yellow()
        };
        println!("{:<8} | {:>8} | {}", vertex, distance, settled);
    }
}

fn print_routes(routes: &[Route<&str, u32>]) {
    println!("\n{}", "Shortest paths from A".bright_cyan().bold());
    for route in routes {
        let distance = route
            .distance
            .map_or_else(|| "∞".to_string(), |d| d.to_string());
        let path = route
            .path
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.join(" → "));
        println!("{:<8} | {:>8} | {}", route.target, distance, path);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut builder = DirectedGraph::builder();
    builder
        .add_undirected_edge("A", "B", 5u32)
        .add_undirected_edge("A", "C", 10)
        .add_undirected_edge("B", "D", 3)
        .add_undirected_edge("C", "D", 2)
        .add_undirected_edge("D", "E", 4)
        .add_vertex("Z");
    let graph = builder.build()?;

    let mut observer = |step: &SettleStep<'_, &'static str, u32>| print_step(step);
    let result = Dijkstra::new().run_observed(&graph, "A", &mut observer)?;

    print_routes(&result.routes(&graph)?);
    Ok(())
}
