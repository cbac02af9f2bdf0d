use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// A directed weighted edge `from -> to`.
///
/// Weights may be negative or zero. Edges are plain values: solvers copy them into
/// their `edge_to` arrays instead of pointing back into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<W: Weight> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

/// Renders a path as `[0->2 0.26 2->7 0.34]`.
pub fn format_path<W: Weight>(path: &[Edge<W>]) -> String {
    let edges: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", edges.join(" "))
}

/// Total weight of a sequence of edges.
pub fn path_weight<W: Weight>(path: &[Edge<W>]) -> W {
    path.iter().fold(W::zero(), |total, edge| total + edge.weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Edge::new(5, 4, 0.35).to_string(), "5->4 0.35");
        assert_eq!(Edge::new(3, 5, 0.0).to_string(), "3->5 0.00");
        assert_eq!(Edge::new(1, 0, -1.239).to_string(), "1->0 -1.24");
    }

    #[test]
    fn test_format_path() {
        let path: Vec<Edge<f64>> = vec![Edge::new(5, 4, 0.35), Edge::new(4, 0, 0.38)];
        assert_eq!(format_path(&path), "[5->4 0.35 4->0 0.38]");
        assert_eq!(format_path::<f64>(&[]), "[]");
        assert!((path_weight(&path) - 0.73).abs() < 1e-12);
    }
}
