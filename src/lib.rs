//! Lazy SSSP - Single-Source Shortest Paths with a lazy-deletion frontier
//!
//! This library computes shortest distances and a shortest-path tree from one
//! source vertex over a directed graph with non-negative edge weights. The
//! frontier is a plain binary heap without decrease-key: improved distances are
//! pushed as new entries and stale ones are discarded when they are popped.
//!
//! Graphs are validated when they are built, so a negative weight is rejected
//! before any traversal starts.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, CancellationToken, PathReconstructor, SettleStep, ShortestPathAlgorithm,
    ShortestPathResult, StepObserver,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, GraphBuilder};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge {from} -> {to}: weights must be non-negative numbers")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("No graph supplied to the shortest path engine")]
    UnknownGraph,

    #[error("Corrupt predecessor table: walk from {target} exceeded {bound} steps")]
    CorruptPredecessorTable { target: String, bound: usize },

    #[error("Computation cancelled after settling {settled} vertices")]
    Cancelled { settled: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
