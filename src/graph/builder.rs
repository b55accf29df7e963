use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Vertex, Weight};
use crate::{Error, Result};
use log::warn;
use std::collections::HashMap;

/// Collects vertices and edges, then validates them all at once in [`GraphBuilder::build`].
///
/// Construction is all-or-nothing: if any declared weight is negative no graph
/// is produced.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertices in declaration order
    vertices: Vec<V>,

    /// Edges in declaration order: (from, to, weight)
    edges: Vec<(V, V, W)>,
}

impl<V, W> Default for GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        GraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declares a vertex, which may stay isolated
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Declares a directed edge. Both endpoints become vertices.
    ///
    /// Declaring the same edge twice keeps the last weight.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> &mut Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Declares both directions of an edge with the same weight
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> &mut Self {
        self.edges.push((a.clone(), b.clone(), weight));
        self.edges.push((b, a, weight));
        self
    }

    /// Validates every weight and produces the graph.
    ///
    /// Reports the first negative (or NaN) weight in declaration order.
    pub fn build(&self) -> Result<DirectedGraph<V, W>> {
        if let Some((from, to, weight)) = self.edges.iter().find(|(_, _, w)| !w.is_admissible()) {
            warn!(
                "Rejecting graph: edge {:?} -> {:?} has invalid weight {:?}",
                from, to, weight
            );
            return Err(Error::InvalidEdgeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }

        let mut outgoing: HashMap<V, Vec<(V, W)>> =
            HashMap::with_capacity(self.vertices.len() + self.edges.len());
        for vertex in &self.vertices {
            outgoing.entry(vertex.clone()).or_default();
        }

        for (from, to, weight) in &self.edges {
            outgoing.entry(to.clone()).or_default();
            let edges = outgoing.entry(from.clone()).or_default();
            // Check if edge already exists and update it if it does
            match edges.iter_mut().find(|(target, _)| target == to) {
                Some(edge) => edge.1 = *weight,
                None => edges.push((to.clone(), *weight)),
            }
        }

        Ok(DirectedGraph::from_parts(outgoing))
    }
}
