use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{PathMode, ShortestPathTree};
use crate::graph::{Graph, WeightedDigraph};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::{AcyclicPaths, BellmanFord, BellmanFordOptions, Dijkstra, Error};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: config.max_sessions,
            max_vertices: config.max_vertices,
            max_edges: config.max_edges,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/solve/:session_id", post(solve))
        .route("/api/solve/:session_id/compare", post(compare_solvers))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

/// Maps solver failures to HTTP statuses: bad input is the client's fault,
/// anything else is ours.
fn solver_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) | Error::SourceNotFound(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::NotAcyclic(_) => (StatusCode::UNPROCESSABLE_ENTITY, "not_acyclic"),
        Error::BudgetExceeded(_) => (StatusCode::UNPROCESSABLE_ENTITY, "budget_exceeded"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed"),
    };
    api_error(status, code, err.to_string())
}

/// Load a digraph into a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<Json<Session>, ApiError> {
    // Adjacency lists are allocated up front, so the size is checked before building
    if request.vertex_count > state.max_vertices || request.edges.len() > state.max_edges {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "graph_too_large",
            format!(
                "Graphs are limited to {} vertices and {} edges, got {} and {}",
                state.max_vertices,
                state.max_edges,
                request.vertex_count,
                request.edges.len()
            ),
        ));
    }

    let digraph = WeightedDigraph::from_edges(request.vertex_count, request.edges).map_err(|err| {
        api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
    })?;

    let session = Session::new(digraph);
    {
        let mut sessions = state.sessions()?;
        if sessions.len() >= state.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions are kept", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session.clone());
    }

    log::info!(
        "session {} created: {} vertices, {} edges",
        session.id,
        session.graph.vertex_count,
        session.graph.edge_count
    );
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Run a solver on a session's digraph
pub async fn solve(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let digraph = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => Arc::clone(&session.digraph),
            None => return Err(session_not_found()),
        }
    };

    // Solvers run to completion in their constructor; keep that off the async workers
    let response = tokio::task::spawn_blocking(move || run_solver(&digraph, &request))
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "algorithm_execution_failed",
                err.to_string(),
            )
        })??;

    {
        let mut sessions = state.sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Run several solvers on the same digraph
pub async fn compare_solvers(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(requests): Json<Vec<SolveRequest>>,
) -> Result<Json<Vec<SolveResponse>>, ApiError> {
    let mut results = Vec::new();

    for request in requests {
        let result = solve(State(state.clone()), Path(session_id), Json(request)).await?;
        results.push(result.0);
    }

    Ok(Json(results))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.sessions()?;
    let mut summaries: Vec<SessionSummary> = sessions.values().map(SessionSummary::from).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn run_solver(graph: &WeightedDigraph<f64>, request: &SolveRequest) -> Result<SolveResponse, ApiError> {
    let start_time = Instant::now();

    let mut response = match request.algorithm.as_str() {
        "dijkstra" => {
            if request.mode != PathMode::Shortest {
                return Err(unsupported_mode(request));
            }
            if !graph.is_non_negative() {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "negative_weights",
                    "Dijkstra requires nonnegative edge weights; use bellman-ford".to_string(),
                ));
            }
            let tree = Dijkstra::new(graph, request.source).map_err(solver_error)?;
            summarize(&tree, graph)
        }
        "bellman-ford" => {
            if request.mode != PathMode::Shortest {
                return Err(unsupported_mode(request));
            }
            let mut options = BellmanFordOptions::new();
            if let Some(budget) = request.relaxation_budget {
                options = options.with_relaxation_budget(budget);
            }
            let tree = BellmanFord::with_options(graph, request.source, options).map_err(solver_error)?;
            let mut response = if tree.has_negative_cycle() {
                // Distances downstream of a negative cycle are meaningless, report only the cycle
                empty_response(&tree, graph)
            } else {
                summarize(&tree, graph)
            };
            response.negative_cycle = tree.has_negative_cycle().then(|| tree.negative_cycle().to_vec());
            response.relaxations = Some(tree.relaxations());
            response
        }
        "acyclic" => {
            let tree = AcyclicPaths::new(graph, request.source, request.mode).map_err(solver_error)?;
            summarize(&tree, graph)
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                format!("Unknown algorithm: {}", request.algorithm),
            ));
        }
    };

    response.algorithm = request.algorithm.clone();
    response.execution_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    Ok(response)
}

fn unsupported_mode(request: &SolveRequest) -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        "unsupported_mode",
        format!("{} only computes shortest paths", request.algorithm),
    )
}

fn empty_response<T: ShortestPathTree<f64>>(tree: &T, graph: &WeightedDigraph<f64>) -> SolveResponse {
    SolveResponse {
        execution_id: Uuid::new_v4(),
        algorithm: tree.name().to_string(),
        source: tree.source(),
        mode: tree.mode(),
        execution_time_ms: 0.0,
        distances: vec![None; graph.vertex_count()],
        paths: Vec::new(),
        reachable: 0,
        negative_cycle: None,
        relaxations: None,
    }
}

fn summarize<T: ShortestPathTree<f64>>(tree: &T, graph: &WeightedDigraph<f64>) -> SolveResponse {
    let mut response = empty_response(tree, graph);

    for (v, &distance) in tree.distances().iter().enumerate() {
        if distance == tree.mode().unreached::<f64>() {
            continue;
        }
        response.distances[v] = Some(distance);
        if let Ok(edges) = tree.path_to(v) {
            response.paths.push(WebPath {
                target: v,
                distance,
                edges,
            });
        }
    }
    response.reachable = tree.reachable();
    response
}
