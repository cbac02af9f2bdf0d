use std::fmt::{Debug, Display};
use num_traits::Float;

use crate::graph::Edge;

/// Numeric type usable as an edge weight.
///
/// Any IEEE-style float works; `W::infinity()` and `W::neg_infinity()` serve as the
/// "unreached" sentinels for shortest and longest paths respectively.
pub trait Weight: Float + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: Float + Debug + Display + Send + Sync + 'static {}

/// Trait representing a read-only edge-weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges leaving a vertex, most recently added first.
    /// Out-of-range vertices have no edges.
    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = &Edge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
