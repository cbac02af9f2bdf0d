use std::collections::VecDeque;

use crate::algorithm::cycle::find_cycle;
use crate::algorithm::relax::{relax, PathMode};
use crate::algorithm::ShortestPathTree;
use crate::graph::{path_weight, Edge, Graph, Weight, WeightedDigraph};
use crate::{Error, Result};

/// Tuning knobs for [`BellmanFord`].
#[derive(Debug, Clone, Default)]
pub struct BellmanFordOptions {
    /// Edge relaxations between negative-cycle checkpoints; defaults to V
    check_interval: Option<usize>,

    /// Upper bound on edge relaxations before construction gives up
    relaxation_budget: Option<u64>,
}

impl BellmanFordOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the parent-edge forest for a cycle every `interval` relaxations
    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = Some(interval.max(1));
        self
    }

    /// Fail with [`Error::BudgetExceeded`] instead of relaxing more than `budget` edges
    pub fn with_relaxation_budget(mut self, budget: u64) -> Self {
        self.relaxation_budget = Some(budget);
        self
    }
}

/// Queue-based Bellman-Ford for digraphs with arbitrary edge weights.
///
/// Only vertices whose distance changed in the previous round can lead to further
/// changes, so those are kept on a FIFO queue (at most one copy each) instead of
/// sweeping every edge V times. A negative cycle reachable from the source would keep
/// the queue non-empty forever; to terminate, every V relaxations the parent edges in
/// `edge_to` are copied into a fresh digraph and searched for a cycle. Any cycle in
/// that forest has negative total weight.
///
/// Time proportional to E * V in the worst case, extra space V.
#[derive(Debug, Clone)]
pub struct BellmanFord<W> {
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<Edge<W>>>,
    /// Number of edge relaxations performed
    relaxations: u64,
    cycle: Option<Vec<Edge<W>>>,
}

impl<W> BellmanFord<W>
where
    W: Weight,
{
    /// Computes shortest paths from `source` with default options
    pub fn new<G: Graph<W>>(graph: &G, source: usize) -> Result<Self> {
        Self::with_options(graph, source, BellmanFordOptions::default())
    }

    pub fn with_options<G: Graph<W>>(
        graph: &G,
        source: usize,
        options: BellmanFordOptions,
    ) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let check_interval = options.check_interval.unwrap_or(n).max(1) as u64;

        let mut bf = BellmanFord {
            source,
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
            relaxations: 0,
            cycle: None,
        };
        bf.dist_to[source] = W::zero();

        let mut queue = VecDeque::with_capacity(n);
        let mut on_queue = vec![false; n];
        queue.push_back(source);
        on_queue[source] = true;

        'passes: while !bf.has_negative_cycle() {
            let Some(v) = queue.pop_front() else { break };
            on_queue[v] = false;

            for edge in graph.edges_from(v) {
                if let Some(budget) = options.relaxation_budget {
                    if bf.relaxations >= budget {
                        log::debug!("bellman-ford from {} stopped after {} relaxations", source, budget);
                        return Err(Error::BudgetExceeded(budget));
                    }
                }

                if relax(edge, &mut bf.dist_to, &mut bf.edge_to, PathMode::Shortest) && !on_queue[edge.to] {
                    queue.push_back(edge.to);
                    on_queue[edge.to] = true;
                }

                bf.relaxations += 1;
                if bf.relaxations % check_interval == 0 {
                    bf.find_negative_cycle()?;
                    if bf.has_negative_cycle() {
                        break 'passes;
                    }
                }
            }
        }

        match &bf.cycle {
            Some(cycle) => log::debug!(
                "bellman-ford from {}: negative cycle of {} edges after {} relaxations",
                source,
                cycle.len(),
                bf.relaxations
            ),
            None => log::debug!(
                "bellman-ford from {}: {} of {} vertices reached in {} relaxations",
                source,
                bf.reachable(),
                n,
                bf.relaxations
            ),
        }
        Ok(bf)
    }

    /// Searches the current parent-edge forest for a cycle
    fn find_negative_cycle(&mut self) -> Result<()> {
        let mut spt = WeightedDigraph::new(self.edge_to.len());
        for edge in self.edge_to.iter().flatten() {
            spt.add(*edge)?;
        }
        log::trace!(
            "checkpoint after {} relaxations: {} parent edges",
            self.relaxations,
            spt.edge_count()
        );
        self.cycle = find_cycle(&spt);
        Ok(())
    }

    /// Reports whether a negative cycle is reachable from the source.
    /// When it is, distances and paths of vertices downstream of it are meaningless.
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Edges of the negative cycle found, in order; empty if there is none
    pub fn negative_cycle(&self) -> &[Edge<W>] {
        self.cycle.as_deref().unwrap_or(&[])
    }

    /// Total weight of the negative cycle, if one was found
    pub fn negative_cycle_weight(&self) -> Option<W> {
        self.cycle.as_deref().map(path_weight)
    }

    /// Edge relaxations performed during construction
    pub fn relaxations(&self) -> u64 {
        self.relaxations
    }
}

impl<W> ShortestPathTree<W> for BellmanFord<W>
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::format_path;

    /// tinyEWDn: negative weights, no negative cycle
    fn tiny_ewdn() -> WeightedDigraph<f64> {
        let edges = [
            (4, 5, 0.35), (5, 4, 0.35), (4, 7, 0.37), (5, 7, 0.28), (7, 5, 0.28), (5, 1, 0.32),
            (0, 4, 0.38), (0, 2, 0.26), (7, 3, 0.39), (1, 3, 0.29), (2, 7, 0.34), (6, 2, -1.20),
            (3, 6, 0.52), (6, 0, -1.40), (6, 4, -1.25),
        ];
        let mut g = WeightedDigraph::new(8);
        for (v, w, weight) in edges {
            g.add_edge(v, w, weight).unwrap();
        }
        g
    }

    #[test]
    fn test_negative_weights_without_cycle() {
        let sp = BellmanFord::new(&tiny_ewdn(), 0).unwrap();
        assert!(!sp.has_negative_cycle());
        assert!(sp.negative_cycle().is_empty());
        assert_eq!(sp.negative_cycle_weight(), None);

        assert_eq!(
            format_path(&sp.path_to(4).unwrap()),
            "[0->2 0.26 2->7 0.34 7->3 0.39 3->6 0.52 6->4 -1.25]"
        );
        assert!((sp.dist_to(4).unwrap() - 0.26).abs() < 1e-9);
        assert!((sp.dist_to(1).unwrap() - 0.93).abs() < 1e-9);
        assert!((sp.dist_to(6).unwrap() - 1.51).abs() < 1e-9);
    }

    #[test]
    fn test_negative_cycle_is_detected() {
        // 5->4 weighs -0.66, so 4->5->4 is a negative cycle
        let edges = [
            (4, 5, 0.35), (5, 4, -0.66), (4, 7, 0.37), (5, 7, 0.28), (7, 5, 0.28), (5, 1, 0.32),
            (0, 4, 0.38), (0, 2, 0.26), (7, 3, 0.39), (1, 3, 0.29), (2, 7, 0.34), (6, 2, 0.40),
            (3, 6, 0.52), (6, 0, 0.58), (6, 4, 0.93),
        ];
        let mut g = WeightedDigraph::new(8);
        for (v, w, weight) in edges {
            g.add_edge(v, w, weight).unwrap();
        }

        let sp = BellmanFord::new(&g, 0).unwrap();
        assert!(sp.has_negative_cycle());
        let cycle = sp.negative_cycle();
        assert!(sp.negative_cycle_weight().unwrap() < 0.0);
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(cycle[cycle.len() - 1].to, cycle[0].from);
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let mut g = WeightedDigraph::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(2, 3, -1.0).unwrap();
        g.add_edge(3, 2, -1.0).unwrap();
        let sp = BellmanFord::new(&g, 0).unwrap();
        assert!(!sp.has_negative_cycle());
        assert!(!sp.has_path_to(2).unwrap());
        assert!(sp.path_to(3).unwrap().is_empty());
    }

    #[test]
    fn test_negative_self_loop() {
        let mut g = WeightedDigraph::new(2);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 1, -0.5).unwrap();
        let sp = BellmanFord::new(&g, 0).unwrap();
        assert_eq!(sp.negative_cycle(), &[Edge::new(1, 1, -0.5)]);
    }

    #[test]
    fn test_relaxation_budget() {
        let g = tiny_ewdn();
        let options = BellmanFordOptions::new().with_relaxation_budget(3);
        assert_eq!(
            BellmanFord::with_options(&g, 0, options).unwrap_err(),
            Error::BudgetExceeded(3)
        );

        let sp = BellmanFord::new(&g, 0).unwrap();
        let exact = BellmanFordOptions::new().with_relaxation_budget(sp.relaxations());
        let again = BellmanFord::with_options(&g, 0, exact).unwrap();
        assert_eq!(again.distances(), sp.distances());
    }

    #[test]
    fn test_check_interval_does_not_change_result() {
        let g = tiny_ewdn();
        let every_edge = BellmanFordOptions::new().with_check_interval(1);
        let a = BellmanFord::with_options(&g, 0, every_edge).unwrap();
        let b = BellmanFord::new(&g, 0).unwrap();
        assert_eq!(a.distances(), b.distances());
        assert_eq!(a.relaxations(), b.relaxations());
    }
}
