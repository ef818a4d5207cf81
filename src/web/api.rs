use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::web::models::*;
use crate::{Error, JohnsonEngine};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_session))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/nodes", post(add_node))
        .route("/api/graphs/:session_id/nodes/:name", delete(remove_node))
        .route("/api/graphs/:session_id/edges", post(add_edge))
        .route(
            "/api/graphs/:session_id/edges/:from/:to",
            delete(remove_edge),
        )
        .route("/api/graphs/:session_id/compute", post(compute))
        .route("/api/graphs/:session_id/distances", get(get_distances))
        .route(
            "/api/graphs/:session_id/distances/:from/:to",
            get(get_distance),
        )
        .route("/api/graphs/:session_id/paths/:from/:to", get(get_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: "Session not found".to_string(),
            details: None,
        }),
    )
}

/// Maps engine errors to distinguishable HTTP responses
fn engine_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::NegativeCycle => (StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle"),
        Error::EngineNotReady => (StatusCode::CONFLICT, "engine_not_ready"),
        Error::UnknownNode(_) => (StatusCode::NOT_FOUND, "unknown_node"),
        Error::NoPathFound { .. } => (StatusCode::NOT_FOUND, "no_path_found"),
        Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn mutation_response(session: &Session, changed: bool) -> MutationResponse {
    MutationResponse {
        changed,
        state: session.engine.state().as_str().to_string(),
        node_count: session.engine.graph().node_count(),
        edge_count: session.engine.graph().edge_count(),
    }
}

/// Create a new session, optionally seeded with a graph document
pub async fn create_session(
    State(state): State<AppState>,
    body: Option<Json<GraphDocument>>,
) -> Result<Json<SessionInfo>, ApiError> {
    let engine = match body {
        Some(Json(document)) => {
            let model = document.to_model().map_err(|message| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "invalid_graph_document".to_string(),
                        message,
                        details: None,
                    }),
                )
            })?;
            JohnsonEngine::from_model(model)
        }
        None => JohnsonEngine::new(),
    };

    let mut sessions = state.sessions.lock().unwrap();
    if sessions.len() >= state.max_sessions {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "session_limit_reached".to_string(),
                message: format!("At most {} sessions are allowed", state.max_sessions),
                details: None,
            }),
        ));
    }

    let session = Session::new(engine);
    let info = session.info();
    sessions.insert(session.id, session);

    Ok(Json(info))
}

/// Get the current graph of a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphDocument>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(GraphDocument::from_model(session.engine.graph()))),
        None => Err(session_not_found()),
    }
}

/// Add a node to a session's graph
pub async fn add_node(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddNodeRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    match sessions.get_mut(&session_id) {
        Some(session) => {
            let changed = session.engine.add_node(&request.name);
            Ok(Json(mutation_response(session, changed)))
        }
        None => Err(session_not_found()),
    }
}

/// Remove a node and its incident edges
pub async fn remove_node(
    State(state): State<AppState>,
    Path((session_id, name)): Path<(Uuid, String)>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    match sessions.get_mut(&session_id) {
        Some(session) => {
            let changed = session.engine.remove_node(&name);
            Ok(Json(mutation_response(session, changed)))
        }
        None => Err(session_not_found()),
    }
}

/// Add a directed edge
pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgeRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    match sessions.get_mut(&session_id) {
        Some(session) => {
            let changed =
                session
                    .engine
                    .add_edge(&request.from, &request.to, OrderedFloat(request.weight));
            Ok(Json(mutation_response(session, changed)))
        }
        None => Err(session_not_found()),
    }
}

/// Remove a directed edge
pub async fn remove_edge(
    State(state): State<AppState>,
    Path((session_id, from, to)): Path<(Uuid, String, String)>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    match sessions.get_mut(&session_id) {
        Some(session) => {
            let changed = session.engine.remove_edge(&from, &to);
            Ok(Json(mutation_response(session, changed)))
        }
        None => Err(session_not_found()),
    }
}

/// Run the all-pairs computation for a session
pub async fn compute(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions.get_mut(&session_id).ok_or_else(session_not_found)?;

    let start_time = Instant::now();
    session.engine.compute().map_err(engine_error)?;
    let execution_time = start_time.elapsed();

    let matrix = session.engine.all_distances().map_err(engine_error)?;
    Ok(Json(ComputeResponse {
        state: session.engine.state().as_str().to_string(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: DistanceDocument::from_matrix(&matrix),
    }))
}

/// Get the full distance matrix of a session
pub async fn get_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DistanceDocument>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions.get(&session_id).ok_or_else(session_not_found)?;

    let matrix = session.engine.all_distances().map_err(engine_error)?;
    Ok(Json(DistanceDocument::from_matrix(&matrix)))
}

/// Get the distance between two nodes
pub async fn get_distance(
    State(state): State<AppState>,
    Path((session_id, from, to)): Path<(Uuid, String, String)>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions.get(&session_id).ok_or_else(session_not_found)?;

    let distance = session.engine.distance(&from, &to).map_err(engine_error)?;
    Ok(Json(DistanceResponse {
        from,
        to,
        distance: distance.map(OrderedFloat::into_inner),
    }))
}

/// Get the shortest path between two nodes
pub async fn get_path(
    State(state): State<AppState>,
    Path((session_id, from, to)): Path<(Uuid, String, String)>,
) -> Result<Json<PathResponse>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions.get(&session_id).ok_or_else(session_not_found)?;

    let path = session.engine.path(&from, &to).map_err(engine_error)?;
    // A reconstructed path always has a finite distance
    let distance = session
        .engine
        .distance(&from, &to)
        .map_err(engine_error)?
        .map(OrderedFloat::into_inner)
        .ok_or_else(|| {
            engine_error(Error::Internal(format!(
                "path {} -> {} exists but has no distance",
                from, to
            )))
        })?;

    Ok(Json(PathResponse {
        from,
        to,
        path,
        distance,
    }))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionInfo>> {
    let sessions = state.sessions.lock().unwrap();
    let mut infos: Vec<SessionInfo> = sessions.values().map(Session::info).collect();
    infos.sort_by_key(|info| info.created_at);
    Json(infos)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "johnson_apsp",
        "timestamp": chrono::Utc::now(),
    }))
}
