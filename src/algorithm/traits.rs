use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::algorithm::path::PathReconstructor;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Best known distance per discovered vertex. Absent means infinite.
pub type DistanceTable<V, W> = HashMap<V, W>;

/// Immediate predecessor on a shortest path. The source and unreached vertices are absent.
pub type PredecessorTable<V> = HashMap<V, V>;

/// Vertices whose distance is final.
pub type VisitedSet<V> = HashSet<V>;

/// Counters collected during a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Vertices settled
    pub settled: usize,
    /// Relaxations that improved a distance
    pub relaxations: usize,
    /// Frontier entries dropped because they were stale
    pub stale_discarded: usize,
    /// Largest frontier size, stale entries included
    pub max_frontier_len: usize,
}

/// Distance and path from the source to one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<V, W> {
    pub target: V,
    /// `None` when the vertex is unreachable
    pub distance: Option<W>,
    /// `None` when there is no path
    pub path: Option<Vec<V>>,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Source vertex
    pub source: V,

    /// Distances from source to each reached vertex
    pub distances: DistanceTable<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorTable<V>,

    /// Counters for this run
    pub stats: RunStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Shortest distance to `vertex`, or `None` if it was never reached
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of reached vertices, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Ordered path from the source to `target`, or `Ok(None)` if there is none
    pub fn path_to(&self, target: &V) -> Result<Option<Vec<V>>> {
        PathReconstructor::new(&self.predecessors).reconstruct(&self.source, target)
    }

    /// One route per graph vertex plus the source, sorted by vertex
    pub fn routes<G>(&self, graph: &G) -> Result<Vec<Route<V, W>>>
    where
        G: Graph<V, W> + ?Sized,
    {
        let mut targets: BTreeSet<&V> = graph.vertices().collect();
        targets.insert(&self.source);

        targets
            .into_iter()
            .map(|target| {
                Ok(Route {
                    target: target.clone(),
                    distance: self.distance(target),
                    path: self.path_to(target)?,
                })
            })
            .collect()
    }

    /// Splits the result into its distance and predecessor tables
    pub fn into_tables(self) -> (DistanceTable<V, W>, PredecessorTable<V>) {
        (self.distances, self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Result<Option<Vec<V>>> {
        result.path_to(target)
    }
}
