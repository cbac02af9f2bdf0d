use crate::algorithm::{PathMode, ShortestPathTree};
use crate::graph::WeightedDigraph;
use crate::{AcyclicPaths, BellmanFord, Dijkstra};
use pyo3::prelude::*;

fn to_py_err(err: crate::Error) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

type PyEdge = (usize, usize, f64);

/// Distances (None when unreachable) and the parent edge of every vertex
type PyTree = (Vec<Option<f64>>, Vec<Option<PyEdge>>);

fn export<T: ShortestPathTree<f64>>(tree: &T) -> PyTree {
    let unreached = tree.mode().unreached::<f64>();
    let distances = tree
        .distances()
        .iter()
        .map(|d| (*d != unreached).then_some(*d))
        .collect();
    let parents = tree
        .edges_to()
        .iter()
        .map(|e| e.map(|e| (e.from, e.to, e.weight)))
        .collect();
    (distances, parents)
}

#[pyclass]
pub struct PyDigraph {
    graph: WeightedDigraph<f64>,
}

#[pymethods]
impl PyDigraph {
    #[new]
    fn new(vertices: usize) -> Self {
        PyDigraph {
            graph: WeightedDigraph::new(vertices),
        }
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> PyResult<()> {
        self.graph.add_edge(from, to, weight).map_err(to_py_err)
    }

    fn dijkstra(&self, source: usize) -> PyResult<PyTree> {
        let tree = Dijkstra::new(&self.graph, source).map_err(to_py_err)?;
        Ok(export(&tree))
    }

    /// Returns the tree and the negative cycle (empty when there is none)
    fn bellman_ford(&self, source: usize) -> PyResult<(PyTree, Vec<PyEdge>)> {
        let tree = BellmanFord::new(&self.graph, source).map_err(to_py_err)?;
        let cycle = tree
            .negative_cycle()
            .iter()
            .map(|e| (e.from, e.to, e.weight))
            .collect();
        Ok((export(&tree), cycle))
    }

    fn acyclic(&self, source: usize, longest: bool) -> PyResult<PyTree> {
        let mode = if longest { PathMode::Longest } else { PathMode::Shortest };
        let tree = AcyclicPaths::new(&self.graph, source, mode).map_err(to_py_err)?;
        Ok(export(&tree))
    }
}

#[pymodule]
fn spt_engine_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyDigraph>()?;
    Ok(())
}
