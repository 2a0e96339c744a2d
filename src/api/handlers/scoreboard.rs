use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::{ApiJson, ApiPath, ApiQuery, CurrentSession};
use crate::api::state::AppState;
use crate::domain::scoreboard::events::ScoreboardEvent;
use crate::domain::scoreboard::{
    PenaltyRecord, PlayerRecord, RecordId, Scoreboard, ScoreboardSnapshot, TeamId, Winner,
};

/// Request body for adding a player
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub team: u8,
    pub name: String,
    pub score_before: i64,
    pub score_after: i64,
}

/// Request body for replacing a player's scores
#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    pub score_before: i64,
    pub score_after: i64,
}

/// Request body for moving a player to another team
#[derive(Debug, Deserialize)]
pub struct MovePlayerRequest {
    pub to_team: u8,
}

/// Request body for adding a penalty
#[derive(Debug, Deserialize)]
pub struct AddPenaltyRequest {
    pub team: u8,
    pub description: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct TopPlayersQuery {
    pub n: Option<usize>,
}

/// Response from any successful command
#[derive(Debug, Serialize)]
pub struct CommandResponse<T> {
    pub record: T,
    /// Confirmation to show the user
    pub message: String,
}

impl<T> CommandResponse<T> {
    fn new(board: &Scoreboard, record: T) -> Self {
        Self {
            record,
            message: board
                .last_event()
                .map(ScoreboardEvent::message)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopPlayersResponse {
    pub team: TeamId,
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Serialize)]
pub struct WinnerResponse {
    pub winner: Winner,
    pub team1_total: i64,
    pub team2_total: i64,
}

/// Get a snapshot of the session's scoreboard
///
/// GET /api/scoreboard
pub async fn get_scoreboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Json<ScoreboardSnapshot> {
    let board = state.open_session(session).await;
    let snapshot = board.lock().await.snapshot(state.top_players_count);

    tracing::debug!("Snapshot for session {}", session);
    Json(snapshot)
}

/// Add a player to a team
///
/// POST /api/scoreboard/players
pub async fn add_player(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(req): ApiJson<AddPlayerRequest>,
) -> Result<(StatusCode, Json<CommandResponse<PlayerRecord>>), ApiError> {
    let team = TeamId::try_from(req.team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let player = board
        .add_player(team, req.name, req.score_before, req.score_after)
        .inspect_err(|e| tracing::warn!("Rejected player for session {}: {}", session, e))?;

    tracing::info!("Session {} added player {} to {}", session, player.id(), team);
    Ok((StatusCode::CREATED, Json(CommandResponse::new(&board, player))))
}

/// Replace a player's scores
///
/// PUT /api/scoreboard/teams/:team/players/:id
pub async fn update_player(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath((team, id)): ApiPath<(u8, Uuid)>,
    ApiJson(req): ApiJson<UpdatePlayerRequest>,
) -> Result<Json<CommandResponse<PlayerRecord>>, ApiError> {
    let team = TeamId::try_from(team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let player = board
        .update_player(team, RecordId::from(id), req.score_before, req.score_after)
        .inspect_err(|e| tracing::warn!("Rejected update for session {}: {}", session, e))?;

    tracing::info!("Session {} updated player {}", session, id);
    Ok(Json(CommandResponse::new(&board, player)))
}

/// Delete a player
///
/// DELETE /api/scoreboard/teams/:team/players/:id
pub async fn remove_player(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath((team, id)): ApiPath<(u8, Uuid)>,
) -> Result<Json<CommandResponse<PlayerRecord>>, ApiError> {
    let team = TeamId::try_from(team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let player = board
        .remove_player(team, RecordId::from(id))
        .inspect_err(|e| tracing::warn!("Rejected removal for session {}: {}", session, e))?;

    tracing::info!("Session {} removed player {} from {}", session, id, team);
    Ok(Json(CommandResponse::new(&board, player)))
}

/// Move a player to the other team
///
/// POST /api/scoreboard/teams/:team/players/:id/move
pub async fn move_player(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath((team, id)): ApiPath<(u8, Uuid)>,
    ApiJson(req): ApiJson<MovePlayerRequest>,
) -> Result<Json<CommandResponse<PlayerRecord>>, ApiError> {
    let from = TeamId::try_from(team)?;
    let to = TeamId::try_from(req.to_team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let player = board
        .move_to_team(RecordId::from(id), from, to)
        .inspect_err(|e| tracing::warn!("Rejected move for session {}: {}", session, e))?;

    tracing::info!("Session {} moved player {} from {} to {}", session, id, from, to);
    Ok(Json(CommandResponse::new(&board, player)))
}

/// Record a penalty against a team
///
/// POST /api/scoreboard/penalties
pub async fn add_penalty(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(req): ApiJson<AddPenaltyRequest>,
) -> Result<(StatusCode, Json<CommandResponse<PenaltyRecord>>), ApiError> {
    let team = TeamId::try_from(req.team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let penalty = board
        .add_penalty(team, req.description, req.amount)
        .inspect_err(|e| tracing::warn!("Rejected penalty for session {}: {}", session, e))?;

    tracing::info!("Session {} added penalty {} to {}", session, penalty.id(), team);
    Ok((StatusCode::CREATED, Json(CommandResponse::new(&board, penalty))))
}

/// Delete a penalty
///
/// DELETE /api/scoreboard/teams/:team/penalties/:id
pub async fn remove_penalty(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath((team, id)): ApiPath<(u8, Uuid)>,
) -> Result<Json<CommandResponse<PenaltyRecord>>, ApiError> {
    let team = TeamId::try_from(team)?;

    let board = state.open_session(session).await;
    let mut board = board.lock().await;
    let penalty = board
        .remove_penalty(team, RecordId::from(id))
        .inspect_err(|e| tracing::warn!("Rejected removal for session {}: {}", session, e))?;

    tracing::info!("Session {} removed penalty {} from {}", session, id, team);
    Ok(Json(CommandResponse::new(&board, penalty)))
}

/// Best players of a team, `n` defaulting to the configured count
///
/// GET /api/scoreboard/teams/:team/top
pub async fn top_players(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath(team): ApiPath<u8>,
    ApiQuery(query): ApiQuery<TopPlayersQuery>,
) -> Result<Json<TopPlayersResponse>, ApiError> {
    let team = TeamId::try_from(team)?;
    let n = query.n.unwrap_or(state.top_players_count);

    let board = state.open_session(session).await;
    let players = board.lock().await.top_players(team, n).to_vec();

    Ok(Json(TopPlayersResponse { team, players }))
}

/// Current winner and both totals
///
/// GET /api/scoreboard/winner
pub async fn get_winner(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Json<WinnerResponse> {
    let board = state.open_session(session).await;
    let board = board.lock().await;

    Json(WinnerResponse {
        winner: board.winner(),
        team1_total: board.team_total(TeamId::One),
        team2_total: board.team_total(TeamId::Two),
    })
}
