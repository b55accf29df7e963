use log::{debug, trace};
use rayon::prelude::*;

use crate::algorithm::cancel::CancellationToken;
use crate::algorithm::observer::{NoopObserver, SettleStep, StepObserver};
use crate::algorithm::traits::{
    DistanceTable, PredecessorTable, RunStats, ShortestPathAlgorithm, ShortestPathResult,
    VisitedSet,
};
use crate::data_structures::PriorityFrontier;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a binary heap with lazy deletion
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Checked once per settle step when set
    cancellation: Option<CancellationToken>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancellation: None }
    }

    /// Stops runs early with [`Error::Cancelled`] once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Computes shortest distances and predecessors from `source`.
    ///
    /// `source` does not have to be a vertex of `graph`; in that case the
    /// result only contains the source itself.
    pub fn run<V, W, G>(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        self.run_observed(graph, source, &mut NoopObserver)
    }

    /// Like [`Dijkstra::run`], failing with [`Error::UnknownGraph`] when no graph is given
    pub fn run_optional<V, W, G>(
        &self,
        graph: Option<&G>,
        source: V,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        let graph = graph.ok_or(Error::UnknownGraph)?;
        self.run(graph, source)
    }

    /// Runs independent single-source queries for each of `sources` in parallel.
    ///
    /// Results are returned in the order of `sources`.
    pub fn run_each<V, W, G>(&self, graph: &G, sources: &[V]) -> Vec<Result<ShortestPathResult<V, W>>>
    where
        V: Vertex + Send + Sync,
        W: Weight + Send,
        G: Graph<V, W> + Sync + ?Sized,
    {
        sources
            .par_iter()
            .map(|source| self.run(graph, source.clone()))
            .collect()
    }

    /// Computes shortest paths, notifying `observer` after every settle step
    pub fn run_observed<V, W, G, O>(
        &self,
        graph: &G,
        source: V,
        observer: &mut O,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
        O: StepObserver<V, W> + ?Sized,
    {
        debug!(
            "Dijkstra from {:?} on graph with {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        let mut distances: DistanceTable<V, W> = DistanceTable::new();
        let mut predecessors: PredecessorTable<V> = PredecessorTable::new();
        let mut visited: VisitedSet<V> = VisitedSet::new();
        let mut frontier = PriorityFrontier::new();
        let mut stats = RunStats::default();

        distances.insert(source.clone(), W::zero());
        frontier.insert(W::zero(), source.clone());

        // Main Dijkstra loop
        while let Some((dist_u, u)) = frontier.extract_min() {
            // Skip entries superseded by a shorter distance or already settled
            if distances.get(&u) != Some(&dist_u) || visited.contains(&u) {
                stats.stale_discarded += 1;
                continue;
            }

            if let Some(token) = &self.cancellation {
                if token.is_cancelled() {
                    debug!("Dijkstra from {:?} cancelled after {} steps", source, stats.settled);
                    return Err(Error::Cancelled {
                        settled: stats.settled,
                    });
                }
            }

            visited.insert(u.clone());
            stats.settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                // A sum past the weight type's range is treated as infinite
                let Some(new_dist) = dist_u.checked_sum(weight) else {
                    continue;
                };

                let should_update = match distances.get(v) {
                    None => true,
                    Some(current_dist) => new_dist < *current_dist,
                };

                if should_update {
                    distances.insert(v.clone(), new_dist);
                    predecessors.insert(v.clone(), u.clone());
                    frontier.insert(new_dist, v.clone());
                    stats.relaxations += 1;
                }
            }

            trace!("Step {}: settled {:?} at distance {:?}", stats.settled, u, dist_u);

            observer.on_settle(&SettleStep {
                index: stats.settled,
                vertex: &u,
                distance: dist_u,
                distances: &distances,
                visited: &visited,
            });
        }

        stats.max_frontier_len = frontier.high_water();
        debug!(
            "Dijkstra from {:?} finished: {} settled, {} relaxations, {} stale entries, frontier peak {}",
            source, stats.settled, stats.relaxations, stats.stale_discarded, stats.max_frontier_len
        );

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            stats,
        })
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>> {
        self.run(graph, source)
    }
}
