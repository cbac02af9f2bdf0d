use crate::algorithm::relax::{self, PathMode};
use crate::graph::{Edge, Weight};
use crate::{Error, Result};

/// Query surface shared by every single-source solver.
///
/// A solver finishes all of its work when it is constructed; these methods only read
/// the resulting `dist_to` / `edge_to` arrays, so repeated calls return identical answers.
pub trait ShortestPathTree<W>
where
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Source vertex the tree is rooted at
    fn source(&self) -> usize;

    /// Whether the tree holds shortest or longest paths
    fn mode(&self) -> PathMode;

    /// Vertex-indexed best known distances; unreached vertices hold the mode's infinity
    fn distances(&self) -> &[W];

    /// Vertex-indexed last edge on the best known path; `None` for the source and unreached vertices
    fn edges_to(&self) -> &[Option<Edge<W>>];

    /// Distance from the source to `v`, or the infinite sentinel if `v` is unreachable
    fn dist_to(&self, v: usize) -> Result<W> {
        self.distances()
            .get(v)
            .copied()
            .ok_or(Error::InvalidVertex(v))
    }

    /// Whether `v` is reachable from the source
    fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)? != self.mode().unreached())
    }

    /// Edges of the best known path from the source to `v`.
    /// Empty when `v` is the source or is unreachable.
    fn path_to(&self, v: usize) -> Result<Vec<Edge<W>>> {
        if !self.has_path_to(v)? {
            return Ok(Vec::new());
        }
        relax::path_to(v, self.edges_to())
    }

    /// Number of vertices reachable from the source, the source included
    fn reachable(&self) -> usize {
        let unreached = self.mode().unreached::<W>();
        self.distances().iter().filter(|d| **d != unreached).count()
    }
}
