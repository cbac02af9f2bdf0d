pub mod digraph;
pub mod edge;
pub mod generators;
pub mod traits;

pub use digraph::WeightedDigraph;
pub use edge::{format_path, path_weight, Edge};
pub use traits::{Graph, Weight};
