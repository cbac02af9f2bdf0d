use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::PathMode;
use crate::graph::{Edge, Graph, WeightedDigraph};

/// Request body for loading a digraph: a vertex count plus `(from, to, weight)` triples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRequest {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<Edge<f64>>,
}

/// A digraph as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub edges: Vec<Edge<f64>>,
}

impl From<&WeightedDigraph<f64>> for WebGraph {
    fn from(graph: &WeightedDigraph<f64>) -> Self {
        WebGraph {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            edges: graph.edges(),
        }
    }
}

/// Parameters for a solver run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// `dijkstra`, `bellman-ford` or `acyclic`
    pub algorithm: String,
    pub source: usize,
    /// Only the acyclic solver supports longest paths
    #[serde(default)]
    pub mode: PathMode,
    /// Bellman-Ford relaxation budget
    #[serde(default)]
    pub relaxation_budget: Option<u64>,
}

/// Path to one vertex; `edges` is empty for the source itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebPath {
    pub target: usize,
    pub distance: f64,
    pub edges: Vec<Edge<f64>>,
}

/// Response containing solver results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub mode: PathMode,
    pub execution_time_ms: f64,
    /// Vertex-indexed distances; `null` for unreachable vertices
    pub distances: Vec<Option<f64>>,
    /// Paths to every reachable vertex
    pub paths: Vec<WebPath>,
    pub reachable: usize,
    /// Bellman-Ford only: edges of a negative cycle reachable from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<Vec<Edge<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxations: Option<u64>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding a loaded digraph and the latest solver result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    #[serde(skip)]
    pub digraph: Arc<WeightedDigraph<f64>>,
    pub last_result: Option<SolveResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(digraph: WeightedDigraph<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: WebGraph::from(&digraph),
            digraph: Arc::new(digraph),
            last_result: None,
            created_at: Utc::now(),
        }
    }
}

/// Short listing entry for `GET /api/sessions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        SessionSummary {
            id: session.id,
            vertex_count: session.graph.vertex_count,
            edge_count: session.graph.edge_count,
            created_at: session.created_at,
        }
    }
}
