use log::warn;

use crate::algorithm::traits::PredecessorTable;
use crate::graph::Vertex;
use crate::{Error, Result};

/// Walks a predecessor table back from a target to the source.
///
/// The walk is bounded so that a cyclic or otherwise malformed table produces
/// [`Error::CorruptPredecessorTable`] instead of looping forever.
#[derive(Debug, Clone, Copy)]
pub struct PathReconstructor<'a, V>
where
    V: Vertex,
{
    predecessors: &'a PredecessorTable<V>,

    /// Maximum number of predecessor hops
    bound: usize,
}

impl<'a, V> PathReconstructor<'a, V>
where
    V: Vertex,
{
    /// Bounds the walk by the number of table entries, which is the longest
    /// chain a well-formed table can hold.
    pub fn new(predecessors: &'a PredecessorTable<V>) -> Self {
        PathReconstructor {
            predecessors,
            bound: predecessors.len(),
        }
    }

    /// Bounds the walk by the vertex count of the graph the table came from
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.bound = vertex_count;
        self
    }

    /// Returns the path from `source` to `target`, source first.
    ///
    /// `Ok(None)` means the walk ran out of predecessors before reaching the
    /// source, which includes targets that were never reached.
    pub fn reconstruct(&self, source: &V, target: &V) -> Result<Option<Vec<V>>> {
        let mut path = vec![target.clone()];
        let mut current = target;
        let mut steps = 0;

        while current != source {
            let Some(previous) = self.predecessors.get(current) else {
                return Ok(None);
            };

            steps += 1;
            if steps > self.bound {
                warn!(
                    "Predecessor walk from {:?} exceeded {} steps, table is corrupt",
                    target, self.bound
                );
                return Err(Error::CorruptPredecessorTable {
                    target: format!("{:?}", target),
                    bound: self.bound,
                });
            }

            path.push(previous.clone());
            current = previous;
        }

        path.reverse();
        Ok(Some(path))
    }
}

/// Reconstructs the path from `source` to `target` using the default bound
pub fn reconstruct<V>(
    predecessors: &PredecessorTable<V>,
    source: &V,
    target: &V,
) -> Result<Option<Vec<V>>>
where
    V: Vertex,
{
    PathReconstructor::new(predecessors).reconstruct(source, target)
}
