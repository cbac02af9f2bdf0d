use crate::algorithm::relax::{relax, PathMode};
use crate::algorithm::ShortestPathTree;
use crate::data_structures::IndexMinHeap;
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an indexed priority queue.
///
/// Repeatedly takes the non-tree vertex with the lowest `dist_to` off the queue and
/// relaxes its edges; a vertex whose distance improves is inserted, or has its priority
/// lowered if it is already queued. Time proportional to E log V, extra space V.
///
/// **Precondition:** every edge weight must be nonnegative. This is not checked, and
/// the result with negative weights is undefined; use [`crate::BellmanFord`] or
/// [`crate::AcyclicPaths`] for such graphs.
#[derive(Debug, Clone)]
pub struct Dijkstra<W> {
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<Edge<W>>>,
}

impl<W> Dijkstra<W>
where
    W: Weight,
{
    /// Computes the shortest-path tree from `source`
    pub fn new<G: Graph<W>>(graph: &G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();

        // Initialize distances and parent edges
        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<Edge<W>>> = vec![None; n];
        dist_to[source] = W::zero();

        let mut queue = IndexMinHeap::new(n);
        queue.insert(source, W::zero())?;

        // Main Dijkstra loop
        while let Some((v, _)) = queue.extract_min() {
            for edge in graph.edges_from(v) {
                if !relax(edge, &mut dist_to, &mut edge_to, PathMode::Shortest) {
                    continue;
                }
                let w = edge.to;
                if queue.contains(w) {
                    queue.update(w, dist_to[w])?;
                } else {
                    queue.insert(w, dist_to[w])?;
                }
            }
        }

        let tree = Dijkstra {
            source,
            dist_to,
            edge_to,
        };
        log::debug!(
            "dijkstra from {}: {} of {} vertices reached",
            source,
            tree.reachable(),
            n
        );
        Ok(tree)
    }
}

impl<W> ShortestPathTree<W> for Dijkstra<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn source(&self) -> usize {
        self.source
    }

    fn mode(&self) -> PathMode {
        PathMode::Shortest
    }

    fn distances(&self) -> &[W] {
        &self.dist_to
    }

    fn edges_to(&self) -> &[Option<Edge<W>>] {
        &self.edge_to
    }
}
