use crate::graph::builder::GraphBuilder;
use crate::graph::traits::{Graph, Vertex, Weight};
use crate::Result;
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists.
///
/// Instances are produced by [`GraphBuilder`] or [`DirectedGraph::from_adjacency`]
/// and cannot be mutated afterwards, so every weight they hold has already been
/// checked to be non-negative.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,

    /// Number of edges, cached at construction
    edge_count: usize,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Starts building a new graph
    pub fn builder() -> GraphBuilder<V, W> {
        GraphBuilder::new()
    }

    /// Builds a graph from a nested `vertex -> neighbour -> weight` mapping.
    ///
    /// Every outer key becomes a vertex, as does every neighbour it names.
    /// Fails with [`crate::Error::InvalidEdgeWeight`] if any weight is negative or NaN.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, neighbours) in adjacency {
            builder.add_vertex(from.clone());
            for (to, weight) in neighbours {
                builder.add_edge(from.clone(), to, weight);
            }
        }
        builder.build()
    }

    pub(crate) fn from_parts(outgoing_edges: HashMap<V, Vec<(V, W)>>) -> Self {
        let edge_count = outgoing_edges.values().map(|edges| edges.len()).sum();
        DirectedGraph {
            outgoing_edges,
            edge_count,
        }
    }

    /// Returns the vertices in ascending order
    pub fn sorted_vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.outgoing_edges.keys().cloned().collect();
        vertices.sort();
        vertices
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}
