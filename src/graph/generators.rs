use std::ops::Range;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{Edge, WeightedDigraph};
use crate::Result;

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates a random digraph with `edges` edges whose weights are drawn from `weights`.
/// Self-loops and parallel edges may appear, as in any multigraph.
///
/// Passing a seed makes the graph reproducible.
pub fn random_digraph(
    vertices: usize,
    edges: usize,
    weights: Range<f64>,
    seed: Option<u64>,
) -> Result<WeightedDigraph<f64>> {
    if vertices == 0 {
        return Ok(WeightedDigraph::new(0));
    }

    let mut rng = make_rng(seed);
    let edges: Vec<Edge<f64>> = (0..edges)
        .map(|_| {
            let from = rng.gen_range(0..vertices);
            let to = rng.gen_range(0..vertices);
            Edge::new(from, to, rng.gen_range(weights.clone()))
        })
        .collect();

    WeightedDigraph::from_edges(vertices, edges)
}

/// Generates a random DAG: every edge goes from a lower to a higher vertex index,
/// so `0, 1, .., V-1` is always a topological order.
pub fn random_dag(
    vertices: usize,
    edges: usize,
    weights: Range<f64>,
    seed: Option<u64>,
) -> Result<WeightedDigraph<f64>> {
    if vertices < 2 {
        return Ok(WeightedDigraph::new(vertices));
    }

    let mut rng = make_rng(seed);
    let edges: Vec<Edge<f64>> = (0..edges)
        .map(|_| {
            let a = rng.gen_range(0..vertices);
            let mut b = rng.gen_range(0..vertices - 1);
            if b >= a {
                b += 1;
            }
            let (from, to) = if a < b { (a, b) } else { (b, a) };
            Edge::new(from, to, rng.gen_range(weights.clone()))
        })
        .collect();

    WeightedDigraph::from_edges(vertices, edges)
}

/// Generates a layered graph where vertex `v` links to the next `fanout` vertices.
/// Every vertex is reachable from `0`, so solvers always visit the whole graph.
pub fn chain_with_shortcuts(
    vertices: usize,
    fanout: usize,
    weights: Range<f64>,
    seed: Option<u64>,
) -> Result<WeightedDigraph<f64>> {
    let mut rng = make_rng(seed);
    let mut edges = Vec::with_capacity(vertices.saturating_mul(fanout));

    for v in 0..vertices {
        for to in (v + 1..vertices).take(fanout) {
            edges.push(Edge::new(v, to, rng.gen_range(weights.clone())));
        }
    }

    WeightedDigraph::from_edges(vertices, edges)
}
