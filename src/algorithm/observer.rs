use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::traits::{DistanceTable, VisitedSet};
use crate::graph::{Vertex, Weight};

/// Read-only view of the engine state right after a vertex is settled
/// and its outgoing edges have been relaxed.
#[derive(Debug)]
pub struct SettleStep<'a, V, W> {
    /// 1-based step number
    pub index: usize,
    /// The vertex settled in this step
    pub vertex: &'a V,
    /// Its final distance
    pub distance: W,
    pub distances: &'a DistanceTable<V, W>,
    pub visited: &'a VisitedSet<V>,
}

impl<'a, V, W> SettleStep<'a, V, W>
where
    V: Vertex,
    W: Weight,
{
    pub fn is_settled(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Current best distance for `vertex`, final or tentative
    pub fn distance_to(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }
}

/// Receives a notification after every settle step.
///
/// Called synchronously on the thread running the query.
pub trait StepObserver<V, W> {
    fn on_settle(&mut self, step: &SettleStep<'_, V, W>);
}

impl<V, W, F> StepObserver<V, W> for F
where
    F: FnMut(&SettleStep<'_, V, W>),
{
    fn on_settle(&mut self, step: &SettleStep<'_, V, W>) {
        self(step)
    }
}

/// Observer that ignores every step
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<V, W> StepObserver<V, W> for NoopObserver {
    fn on_settle(&mut self, _step: &SettleStep<'_, V, W>) {}
}

/// Owned copy of a [`SettleStep`], sorted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSnapshot<V, W>
where
    V: Ord,
{
    pub index: usize,
    pub vertex: V,
    pub distance: W,
    pub distances: BTreeMap<V, W>,
    pub visited: BTreeSet<V>,
}

/// Observer that keeps a snapshot of every step
#[derive(Debug, Clone)]
pub struct StepRecorder<V, W>
where
    V: Ord,
{
    steps: Vec<StepSnapshot<V, W>>,
}

impl<V, W> Default for StepRecorder<V, W>
where
    V: Ord,
{
    fn default() -> Self {
        StepRecorder { steps: Vec::new() }
    }
}

impl<V, W> StepRecorder<V, W>
where
    V: Vertex,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[StepSnapshot<V, W>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepSnapshot<V, W>> {
        self.steps
    }

    /// Settled vertices in settle order
    pub fn settle_order(&self) -> Vec<&V> {
        self.steps.iter().map(|step| &step.vertex).collect()
    }
}

impl<V, W> StepObserver<V, W> for StepRecorder<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn on_settle(&mut self, step: &SettleStep<'_, V, W>) {
        self.steps.push(StepSnapshot {
            index: step.index,
            vertex: step.vertex.clone(),
            distance: step.distance,
            distances: step
                .distances
                .iter()
                .map(|(vertex, distance)| (vertex.clone(), *distance))
                .collect(),
            visited: step.visited.iter().cloned().collect(),
        });
    }
}
