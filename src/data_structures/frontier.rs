use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(distance, vertex)` candidates for shortest path search.
///
/// There is no decrease-key. A better distance for a vertex is inserted as a
/// new entry and the old one stays in the heap; the consumer is expected to
/// discard entries whose distance no longer matches its own table.
///
/// Entries with equal distances come out in ascending vertex order.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, V)>>,

    /// Largest number of entries held at once
    high_water: usize,
}

impl<V, W> Default for PriorityFrontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> PriorityFrontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Returns true if no entries remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the largest number of entries held at once
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Adds a candidate distance for a vertex in O(log n)
    pub fn insert(&mut self, distance: W, vertex: V) {
        self.heap.push(Reverse((distance, vertex)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes and returns the smallest-distance entry in O(log n), or `None` when empty
    pub fn extract_min(&mut self) -> Option<(W, V)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the smallest-distance entry without removing it
    pub fn peek_min(&self) -> Option<(W, &V)> {
        self.heap
            .peek()
            .map(|Reverse((distance, vertex))| (*distance, vertex))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
