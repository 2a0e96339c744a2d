use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{charts, health, scoreboard, sessions};
use crate::api::state::AppState;

/// Builds the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Session routes
        .route(
            "/api/sessions",
            post(sessions::create_session).delete(sessions::end_session),
        )
        // Scoreboard routes
        .route("/api/scoreboard", get(scoreboard::get_scoreboard))
        .route("/api/scoreboard/winner", get(scoreboard::get_winner))
        .route("/api/scoreboard/players", post(scoreboard::add_player))
        .route("/api/scoreboard/penalties", post(scoreboard::add_penalty))
        .route(
            "/api/scoreboard/teams/:team/players/:id",
            put(scoreboard::update_player).delete(scoreboard::remove_player),
        )
        .route(
            "/api/scoreboard/teams/:team/players/:id/move",
            post(scoreboard::move_player),
        )
        .route(
            "/api/scoreboard/teams/:team/penalties/:id",
            delete(scoreboard::remove_penalty),
        )
        .route("/api/scoreboard/teams/:team/top", get(scoreboard::top_players))
        // Chart maker
        .route("/api/charts", post(charts::calculate))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
