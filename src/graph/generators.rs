use crate::graph::{DirectedGraph, GraphBuilder};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges.
///
/// Weights are drawn from `1.0..100.0`; self-loops are skipped. The same seed
/// always yields the same graph.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        builder.add_vertex(v);
    }

    if n > 1 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                builder.add_edge(u, v, weight);
            }
        }
    }

    builder.build()
}

/// Generates a `width x height` grid with 8-connectivity.
///
/// Vertex ids are `y * width + x`. Cardinal moves cost 1.0, diagonal moves 1.4.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new();

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            builder.add_vertex(vertex);

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    builder.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    builder.build()
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex.
///
/// Edges point from each new vertex to the existing vertices it attaches to.
/// Returns an empty graph when `m == 0` or `n <= m`.
pub fn generate_barabasi_albert(
    n: usize,
    m: usize,
    seed: u64,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new();
    if m == 0 || n <= m {
        return builder.build();
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // Connect initial vertices (complete graph)
    for i in 0..m {
        builder.add_vertex(i);
        for j in 0..m {
            if i != j {
                builder.add_edge(i, j, OrderedFloat(rng.gen_range(1.0..100.0)));
            }
        }
    }

    // Degree of each vertex for preferential attachment
    let mut degrees = vec![(m - 1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        builder.add_vertex(i);
        let mut added_edges = HashSet::new();

        while added_edges.len() < m {
            let mut target_value = rng.gen_range(0..total_degree);
            let mut target = 0;

            // Find the target vertex based on cumulative degree
            while target < i && target_value >= degrees[target] {
                target_value -= degrees[target];
                target += 1;
            }

            if target < i && added_edges.insert(target) {
                builder.add_edge(i, target, OrderedFloat(rng.gen_range(1.0..100.0)));
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    builder.build()
}
