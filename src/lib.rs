//! SPT Engine - single-source shortest and longest paths over edge-weighted digraphs
//!
//! The crate computes shortest-path trees (and longest-path trees for DAGs) from a
//! single source vertex. Three solvers share one relaxation primitive:
//!
//! - [`AcyclicPaths`] relaxes vertices in topological order, O(E + V), any weights, DAGs only.
//! - [`Dijkstra`] drives relaxation with an indexed priority queue, O(E log V), nonnegative weights.
//! - [`BellmanFord`] drives relaxation with a FIFO queue, O(E * V), any weights, and reports
//!   a negative cycle reachable from the source instead of looping forever.
//!
//! Every solver runs to completion inside its constructor and is read-only afterwards.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    acyclic::AcyclicPaths,
    all_pairs::DijkstraAllPairs,
    bellman_ford::{BellmanFord, BellmanFordOptions},
    dijkstra::Dijkstra,
    PathMode, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, WeightedDigraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Digraph is not acyclic, found cycle: {0}")]
    NotAcyclic(String),

    #[error("Index {0} is outside the priority queue universe")]
    IndexOutOfRange(usize),

    #[error("Index {0} is already on the priority queue")]
    IndexAlreadyPresent(usize),

    #[error("Index {0} is not on the priority queue")]
    IndexNotPresent(usize),

    #[error("Relaxation budget of {0} exceeded")]
    BudgetExceeded(u64),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
