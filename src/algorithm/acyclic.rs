use crate::algorithm::relax::{relax, PathMode};
use crate::algorithm::topological::topological_order;
use crate::algorithm::ShortestPathTree;
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

/// Shortest or longest paths in an edge-weighted DAG.
///
/// Vertices are relaxed one by one in topological order, so every predecessor of a
/// vertex is final before its outgoing edges are relaxed. One pass, O(E + V), and
/// negative weights are fine. Longest paths only differ in the sentinel (negative
/// infinity) and the sense of the comparison in [`relax`], which is what makes this
/// solver usable for critical-path scheduling.
#[derive(Debug, Clone)]
pub struct AcyclicPaths<W> {
    source: usize,
    mode: PathMode,
    dist_to: Vec<W>,
    edge_to: Vec<Option<Edge<W>>>,
    /// Topological order the vertices were relaxed in
    order: Vec<usize>,
}

impl<W> AcyclicPaths<W>
where
    W: Weight,
{
    /// Computes the path tree from `source`, failing with [`Error::NotAcyclic`] if the
    /// digraph has a directed cycle.
    pub fn new<G: Graph<W>>(graph: &G, source: usize, mode: PathMode) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut dist_to = vec![mode.unreached::<W>(); n];
        let mut edge_to = vec![None; n];
        dist_to[source] = W::zero();

        let order = topological_order(graph)?;
        for &v in &order {
            for edge in graph.edges_from(v) {
                relax(edge, &mut dist_to, &mut edge_to, mode);
            }
        }

        let paths = AcyclicPaths {
            source,
            mode,
            dist_to,
            edge_to,
            order,
        };
        log::debug!(
            "acyclic {:?} paths from {}: {} of {} vertices reached",
            mode,
            source,
            paths.reachable(),
            n
        );
        Ok(paths)
    }

    /// Shortest paths from `source`
    pub fn shortest<G: Graph<W>>(graph: &G, source: usize) -> Result<Self> {
        Self::new(graph, source, PathMode::Shortest)
    }

    /// Longest paths from `source`
    pub fn longest<G: Graph<W>>(graph: &G, source: usize) -> Result<Self> {
        Self::new(graph, source, PathMode::Longest)
    }

    /// The topological order used for relaxation
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl<W> ShortestPathTree<W> for AcyclicPaths<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Acyclic"
    }

    fn source(&self) -> usize {
        self.source
    }

    fn mode(&self) -> PathMode {
        self.mode
    }

    fn distances(&self) -> &[W] {
        &self.dist_to
    }

    fn edges_to(&self) -> &[Option<Edge<W>>] {
        &self.edge_to
    }
}
