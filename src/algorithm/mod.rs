pub mod acyclic;
pub mod all_pairs;
pub mod bellman_ford;
pub mod cycle;
pub mod dijkstra;
pub mod relax;
pub mod topological;
pub mod traits;

pub use relax::PathMode;
pub use traits::ShortestPathTree;
