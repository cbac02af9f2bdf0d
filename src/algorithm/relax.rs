//! Edge relaxation, the one place where distance comparisons live.
//!
//! To relax an edge `v->w` is to test whether the best known way from the source to `w`
//! is to go to `v` first and then take the edge. If it is, `dist_to[w]` and `edge_to[w]`
//! are overwritten. Every solver in this crate funnels its updates through [`relax`].

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Weight};
use crate::{Error, Result};

/// Whether a solver looks for minimum or maximum total weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    #[default]
    Shortest,
    Longest,
}

impl PathMode {
    /// Distance held by vertices no path has reached yet.
    pub fn unreached<W: Weight>(self) -> W {
        match self {
            PathMode::Shortest => W::infinity(),
            PathMode::Longest => W::neg_infinity(),
        }
    }

    /// Reports whether `candidate` beats `current` under this mode.
    pub fn improves<W: Weight>(self, candidate: W, current: W) -> bool {
        match self {
            PathMode::Shortest => candidate < current,
            PathMode::Longest => candidate > current,
        }
    }
}

/// Relaxes `edge` and reports whether it was eligible.
///
/// The candidate distance is `dist_to[edge.from] + edge.weight`. An unreached `from`
/// keeps its infinite sentinel in the sum, so it never improves anything.
pub fn relax<W: Weight>(
    edge: &Edge<W>,
    dist_to: &mut [W],
    edge_to: &mut [Option<Edge<W>>],
    mode: PathMode,
) -> bool {
    let candidate = dist_to[edge.from] + edge.weight;
    let eligible = mode.improves(candidate, dist_to[edge.to]);
    if eligible {
        dist_to[edge.to] = candidate;
        edge_to[edge.to] = Some(*edge);
    }
    eligible
}

/// Walks `edge_to` back from `v` and returns the edges in source-to-`v` order.
///
/// The walk gives up once it has taken more steps than there are vertices: a parent
/// chain that long can only be circling a negative cycle.
pub fn path_to<W: Weight>(v: usize, edge_to: &[Option<Edge<W>>]) -> Result<Vec<Edge<W>>> {
    let mut path = Vec::new();
    let mut current = edge_to.get(v).copied().ok_or(Error::InvalidVertex(v))?;

    while let Some(edge) = current {
        if path.len() >= edge_to.len() {
            return Err(Error::AlgorithmError(format!(
                "parent chain to vertex {} does not reach the source",
                v
            )));
        }
        path.push(edge);
        current = edge_to[edge.from];
    }

    path.reverse();
    Ok(path)
}
