use crate::graph::traits::{Graph, Weight};
use crate::graph::Edge;
use crate::{Error, Result};

/// An edge-weighted digraph stored as vertex-indexed adjacency lists.
///
/// Parallel edges and self-loops are allowed. Edges leaving a vertex are reported
/// most recently added first, which decides the order DFS-based routines explore them.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<W> {
    /// Outgoing edges for each vertex in insertion order; iterated in reverse.
    adjacency: Vec<Vec<Edge<W>>>,

    /// Number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> WeightedDigraph<W>
where
    W: Weight,
{
    /// Creates a digraph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        WeightedDigraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a digraph from a list of edges, failing on the first edge with an
    /// endpoint outside `[0, vertices)`.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let mut graph = WeightedDigraph::new(vertices);
        for edge in edges {
            graph.add(edge)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `from -> to`
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.add(Edge::new(from, to, weight))
    }

    /// Adds an existing edge value
    pub fn add(&mut self, edge: Edge<W>) -> Result<()> {
        if !self.has_vertex(edge.from) {
            return Err(Error::InvalidVertex(edge.from));
        }
        if !self.has_vertex(edge.to) {
            return Err(Error::InvalidVertex(edge.to));
        }

        self.adjacency[edge.from].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns all edges, grouped by source vertex in increasing order
    pub fn edges(&self) -> Vec<Edge<W>> {
        (0..self.vertex_count())
            .flat_map(|v| self.edges_from(v).copied())
            .collect()
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn is_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|edge| edge.weight >= W::zero())
    }
}

impl<W> Graph<W> for WeightedDigraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = &Edge<W>> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().rev())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_most_recent_first() {
        let mut g = WeightedDigraph::new(3);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 2.0).unwrap();
        g.add_edge(0, 1, 3.0).unwrap();

        let targets: Vec<(usize, f64)> = g.edges_from(0).map(|e| (e.to, e.weight)).collect();
        assert_eq!(targets, vec![(1, 3.0), (2, 2.0), (1, 1.0)]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.out_degree(0), 3);
        assert_eq!(g.edges_from(2).count(), 0);
    }

    #[test]
    fn test_edges_concatenates_by_vertex() {
        let mut g = WeightedDigraph::new(3);
        g.add_edge(2, 0, 0.5).unwrap();
        g.add_edge(0, 1, 0.25).unwrap();
        g.add_edge(0, 2, 0.75).unwrap();
        g.add_edge(1, 1, -1.0).unwrap();

        let edges: Vec<String> = g.edges().iter().map(ToString::to_string).collect();
        assert_eq!(edges, vec!["0->2 0.75", "0->1 0.25", "1->1 -1.00", "2->0 0.50"]);
        assert!(!g.is_non_negative());
    }

    #[test]
    fn test_rejects_out_of_range_vertices() {
        let mut g: WeightedDigraph<f64> = WeightedDigraph::new(2);
        assert_eq!(g.add_edge(0, 2, 1.0), Err(Error::InvalidVertex(2)));
        assert_eq!(g.add_edge(7, 0, 1.0), Err(Error::InvalidVertex(7)));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges_from(9).count(), 0);

        let built = WeightedDigraph::from_edges(2, vec![Edge::new(0, 1, 1.0), Edge::new(1, 5, 1.0)]);
        assert_eq!(built.unwrap_err(), Error::InvalidVertex(5));
    }
}
