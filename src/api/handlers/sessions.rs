use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::middleware::CurrentSession;
use crate::api::state::AppState;
use crate::domain::repositories::SessionId;

/// Response from session creation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
}

/// Start a new session with an empty scoreboard
///
/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session_id = SessionId::new();
    state.open_session(session_id).await;

    let live = state.sessions.count().await;
    tracing::info!("Started session {} ({} live)", session_id, live);

    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}

/// End the current session and discard its scoreboard
///
/// DELETE /api/sessions
pub async fn end_session(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .close(session)
        .await
        .map_err(ApiError::not_found)?;

    Ok(StatusCode::NO_CONTENT)
}
