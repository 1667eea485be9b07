//! REST routes over the default game session.

use crate::error::ServerError;
use crate::schema::{
    ActRequest, ActResponse, BoardQuery, BoardResponse, HealthResponse, SetupRequest, SetupResponse,
};
use crate::session::{DEFAULT_SESSION, SessionManager};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use memory_pairs::GameSnapshot;
use tracing::{debug, instrument};

/// Builds the REST router.
///
/// | Route | Purpose |
/// |-------|---------|
/// | `GET /health` | liveness |
/// | `POST /act` | make a move |
/// | `POST /reset` | start a new game, optionally resized |
/// | `GET /state` | full state snapshot |
/// | `GET /board?debug=bool` | rendered board |
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/act", post(act))
        .route("/reset", post(reset))
        .route("/state", get(state))
        .route("/board", get(board))
        .with_state(sessions)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[instrument(skip(sessions, req), fields(action = %req.action))]
async fn act(
    State(sessions): State<SessionManager>,
    Json(req): Json<ActRequest>,
) -> Result<Json<ActResponse>, ServerError> {
    sessions.act(DEFAULT_SESSION, &req.action).map(Json)
}

#[instrument(skip(sessions, req))]
async fn reset(
    State(sessions): State<SessionManager>,
    req: Option<Json<SetupRequest>>,
) -> Result<Json<SetupResponse>, ServerError> {
    let size = req.and_then(|Json(req)| req.size);
    debug!(?size, "Resetting game");
    sessions.reset(DEFAULT_SESSION, size).map(Json)
}

async fn state(State(sessions): State<SessionManager>) -> Result<Json<GameSnapshot>, ServerError> {
    sessions.snapshot(DEFAULT_SESSION).map(Json)
}

async fn board(
    State(sessions): State<SessionManager>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, ServerError> {
    sessions.board(DEFAULT_SESSION, query.debug).map(Json)
}
