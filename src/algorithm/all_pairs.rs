use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathTree;
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

/// All-pairs shortest paths as one [`Dijkstra`] tree per source vertex.
///
/// Time proportional to E V log V and space proportional to V^2; meant for small
/// graphs. The trees are independent and the digraph is only read, so they are built
/// in parallel.
#[derive(Debug, Clone)]
pub struct DijkstraAllPairs<W> {
    trees: Vec<Dijkstra<W>>,
}

impl<W> DijkstraAllPairs<W>
where
    W: Weight,
{
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: Graph<W> + Sync,
    {
        let trees = (0..graph.vertex_count())
            .into_par_iter()
            .map(|source| Dijkstra::new(graph, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(DijkstraAllPairs { trees })
    }

    /// The shortest-path tree rooted at `source`
    pub fn tree(&self, source: usize) -> Result<&Dijkstra<W>> {
        self.trees.get(source).ok_or(Error::InvalidVertex(source))
    }

    /// Distance from `source` to `target`, or infinity if no path exists
    pub fn dist_to(&self, source: usize, target: usize) -> Result<W> {
        self.tree(source)?.dist_to(target)
    }

    /// Shortest path from `source` to `target`; empty if none exists
    pub fn path_to(&self, source: usize, target: usize) -> Result<Vec<Edge<W>>> {
        self.tree(source)?.path_to(target)
    }
}
