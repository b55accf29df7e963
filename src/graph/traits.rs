use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a vertex.
///
/// Any cloneable, hashable, totally ordered label works: `&str`, `String`,
/// integers. The ordering only breaks ties between frontier entries with equal
/// distances.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Numeric edge weight.
///
/// Implemented for the primitive integers and for `OrderedFloat<f32>` /
/// `OrderedFloat<f64>`.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// True for weights a graph may hold: non-negative, and not NaN for floats
    fn is_admissible(self) -> bool;

    /// Sum of two path lengths, or `None` when it cannot be represented
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn is_admissible(self) -> bool {
                    self >= <$t as Zero>::zero()
                }

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn is_admissible(self) -> bool {
                    !self.0.is_nan() && self >= Self::zero()
                }

                // Overflow saturates to +inf, which still orders correctly
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing a weighted directed graph that is read-only during a query
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every declared vertex
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// Unknown vertices have no outgoing edges.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;
}
