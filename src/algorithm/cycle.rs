//! Directed cycle detection.
//!
//! A depth-first search marks each vertex `OnStack` on entry and `Visited` once all of
//! its edges are explored. An edge into a vertex that is still on the stack closes a
//! cycle. The search keeps an explicit stack of frames instead of recursing, so deep
//! graphs (long Bellman-Ford parent chains in particular) cannot overflow the call stack.

use crate::graph::{Edge, Graph, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnStack,
    Visited,
}

/// One open DFS call: the vertex and the edges it has yet to explore.
struct Frame<'a, W> {
    vertex: usize,
    edges: Box<dyn Iterator<Item = &'a Edge<W>> + 'a>,
}

struct CycleSearch<'a, W, G> {
    graph: &'a G,
    state: Vec<VisitState>,
    /// Tree edge used to enter each vertex; only kept when the cycle itself is wanted.
    edge_to: Option<Vec<Option<Edge<W>>>>,
}

impl<'a, W, G> CycleSearch<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    fn new(graph: &'a G, record_path: bool) -> Self {
        let n = graph.vertex_count();
        CycleSearch {
            graph,
            state: vec![VisitState::Unvisited; n],
            edge_to: record_path.then(|| vec![None; n]),
        }
    }

    /// Searches from every unvisited vertex in increasing order and returns the first
    /// back edge found.
    fn run(&mut self) -> Option<Edge<W>> {
        for root in 0..self.graph.vertex_count() {
            if self.state[root] != VisitState::Unvisited {
                continue;
            }
            if let Some(back_edge) = self.dfs(root) {
                return Some(back_edge);
            }
        }
        None
    }

    fn dfs(&mut self, root: usize) -> Option<Edge<W>> {
        let graph = self.graph;
        let mut stack = vec![Frame {
            vertex: root,
            edges: graph.edges_from(root),
        }];
        self.state[root] = VisitState::OnStack;

        while let Some(frame) = stack.last_mut() {
            match frame.edges.next() {
                Some(edge) => match self.state[edge.to] {
                    VisitState::Unvisited => {
                        if let Some(edge_to) = self.edge_to.as_mut() {
                            edge_to[edge.to] = Some(*edge);
                        }
                        self.state[edge.to] = VisitState::OnStack;
                        stack.push(Frame {
                            vertex: edge.to,
                            edges: graph.edges_from(edge.to),
                        });
                    }
                    VisitState::OnStack => return Some(*edge),
                    VisitState::Visited => {}
                },
                None => {
                    self.state[frame.vertex] = VisitState::Visited;
                    stack.pop();
                }
            }
        }

        None
    }

    /// Turns the back edge `u->w` into the cycle `u->w, w->..., ...->u`.
    fn cycle_from(&self, back_edge: Edge<W>) -> Vec<Edge<W>> {
        let mut tree_path = Vec::new();
        if let Some(edge_to) = &self.edge_to {
            let mut x = back_edge.from;
            while x != back_edge.to {
                let Some(edge) = edge_to[x] else { break };
                tree_path.push(edge);
                x = edge.from;
            }
        }
        tree_path.reverse();

        let mut cycle = Vec::with_capacity(tree_path.len() + 1);
        cycle.push(back_edge);
        cycle.extend(tree_path);
        cycle
    }
}

/// Reports whether `graph` has a directed cycle.
/// The search stops at the first back edge it meets.
pub fn has_cycle<W, G>(graph: &G) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    CycleSearch::new(graph, false).run().is_some()
}

/// Returns the first directed cycle found, as edges in traversal order.
///
/// The cycle starts with the edge that closed it (from the deepest vertex back to an
/// ancestor still on the DFS stack) and then follows the DFS tree edges from that
/// ancestor down to the deepest vertex, so the last edge ends where the first begins.
pub fn find_cycle<W, G>(graph: &G) -> Option<Vec<Edge<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    let mut search = CycleSearch::new(graph, true);
    let back_edge = search.run()?;
    let cycle = search.cycle_from(back_edge);
    log::trace!("found cycle of {} edges closed by {}", cycle.len(), back_edge);
    Some(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{format_path, WeightedDigraph};

    fn tiny_dg() -> WeightedDigraph<f64> {
        let edges = [
            (4, 2), (2, 3), (3, 2), (6, 0), (0, 1), (2, 0), (11, 12), (12, 9), (9, 10), (9, 11),
            (7, 9), (10, 12), (11, 4), (4, 3), (3, 5), (6, 8), (8, 6), (5, 4), (0, 5), (6, 4),
            (6, 9), (7, 6),
        ];
        let mut g = WeightedDigraph::new(13);
        for (v, w) in edges {
            g.add_edge(v, w, 0.0).unwrap();
        }
        g
    }

    #[test]
    fn test_has_cycle() {
        assert!(has_cycle(&tiny_dg()));
    }

    #[test]
    fn test_find_cycle_reports_first_back_edge() {
        let cycle = find_cycle(&tiny_dg()).unwrap();
        assert_eq!(format_path(&cycle), "[3->5 0.00 5->4 0.00 4->3 0.00]");
    }

    #[test]
    fn test_acyclic_graph() {
        let mut g = WeightedDigraph::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(3, 2, 1.0).unwrap();
        assert!(!has_cycle(&g));
        assert!(find_cycle(&g).is_none());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut g = WeightedDigraph::new(2);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 1, -2.0).unwrap();
        let cycle = find_cycle(&g).unwrap();
        assert_eq!(cycle, vec![Edge::new(1, 1, -2.0)]);
    }

    #[test]
    fn test_cycle_edges_are_contiguous() {
        let mut g = WeightedDigraph::new(6);
        for (v, w) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 2)] {
            g.add_edge(v, w, 1.0).unwrap();
        }
        let cycle = find_cycle(&g).unwrap();
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle[0], Edge::new(5, 2, 1.0));
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(cycle[cycle.len() - 1].to, cycle[0].from);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let mut g = WeightedDigraph::new(n);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1, 1.0).unwrap();
        }
        assert!(!has_cycle(&g));
        g.add_edge(n - 1, 0, 1.0).unwrap();
        assert_eq!(find_cycle(&g).unwrap().len(), n);
    }
}
