//! End-to-end API integration tests
//!
//! These tests drive the full router in-process and verify:
//! - Session creation, isolation and teardown
//! - Scoreboard commands and their confirmation messages
//! - Error responses for invalid input and missing records
//! - Chart maker calculations

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use stomp_counter::api::{self, middleware::SESSION_HEADER, AppState};
use stomp_counter::infrastructure::repositories::InMemorySessionRepository;
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

/// Setup test application with an in-memory session store
fn setup_app() -> Router {
    let sessions = Arc::new(InMemorySessionRepository::new());
    api::router(AppState::new(sessions, 3))
}

/// Send a request and return status plus parsed JSON body (Null when empty)
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    session: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header(SESSION_HEADER, session.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).to_string())
        })
    };

    (status, value)
}

/// Create a session through the API
async fn create_session(app: &Router) -> Uuid {
    let (status, body) = send(app, "POST", "/api/sessions", None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().parse().unwrap()
}

async fn add_player(app: &Router, session: Uuid, team: u8, name: &str, before: i64, after: i64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/scoreboard/players",
        Some(session),
        Some(json!({
            "team": team,
            "name": name,
            "score_before": before,
            "score_after": after
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_missing_session_header_is_rejected() {
    let app = setup_app();

    let (status, body) = send(&app, "GET", "/api/scoreboard", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("x-session-id"));
}

#[tokio::test]
async fn test_invalid_session_header_is_rejected() {
    let app = setup_app();
    let request = Request::builder()
        .uri("/api/scoreboard")
        .header(SESSION_HEADER, "not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_scoreboard_snapshot() {
    let app = setup_app();
    let session = create_session(&app).await;

    let (status, body) = send(&app, "GET", "/api/scoreboard", Some(session), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["winner"], "tie");
    assert_eq!(body["teams"][0]["total"], 0);
    assert_eq!(body["teams"][1]["top_players"], json!([]));
}

#[tokio::test]
async fn test_add_player_and_penalty_flow() {
    let app = setup_app();
    let session = create_session(&app).await;

    let ana = add_player(&app, session, 1, "Ana", 10, 15).await;
    assert_eq!(ana["record"]["difference"], 5);
    assert_eq!(ana["message"], "Added Ana's stats!");

    let (status, penalty) = send(
        &app,
        "POST",
        "/api/scoreboard/penalties",
        Some(session),
        Some(json!({ "team": 1, "description": "late", "amount": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(penalty["record"]["difference"], -3);
    assert_eq!(penalty["message"], "Added penalty to Team 1");

    add_player(&app, session, 2, "Bo", 0, 10).await;

    let (status, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(session), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(winner["winner"], "team2");
    assert_eq!(winner["team1_total"], 2);
    assert_eq!(winner["team2_total"], 10);

    let (_, snapshot) = send(&app, "GET", "/api/scoreboard", Some(session), None).await;
    assert_eq!(snapshot["teams"][0]["score_before_total"], 10);
    assert_eq!(snapshot["teams"][0]["score_after_total"], 15);
    assert_eq!(snapshot["teams"][0]["penalties"][0]["description"], "late");
}

#[tokio::test]
async fn test_add_player_with_score_decrease_fails() {
    let app = setup_app();
    let session = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/scoreboard/players",
        Some(session),
        Some(json!({ "team": 1, "name": "Ana", "score_before": 15, "score_after": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("cannot be lower"));

    let (_, snapshot) = send(&app, "GET", "/api/scoreboard", Some(session), None).await;
    assert_eq!(snapshot["teams"][0]["players"], json!([]));
}

#[tokio::test]
async fn test_unknown_team_fails() {
    let app = setup_app();
    let session = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/scoreboard/penalties",
        Some(session),
        Some(json!({ "team": 3, "description": "late", "amount": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown team: 3 (must be 1 or 2)");
}

#[tokio::test]
async fn test_total_beyond_i64_is_rejected() {
    let app = setup_app();
    let session = create_session(&app).await;
    add_player(&app, session, 1, "Ana", 0, i64::MAX).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/scoreboard/players",
        Some(session),
        Some(json!({ "team": 1, "name": "Bo", "score_before": 0, "score_after": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Scores on Team 1 are too large to total");

    let (status, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(session), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(winner["team1_total"], i64::MAX);
    assert_eq!(winner["winner"], "team1");
}

#[tokio::test]
async fn test_malformed_path_params_return_json_error() {
    let app = setup_app();
    let session = create_session(&app).await;

    let uris = [
        "/api/scoreboard/teams/1/players/not-a-uuid".to_string(),
        format!("/api/scoreboard/teams/300/players/{}", Uuid::new_v4()),
        format!("/api/scoreboard/teams/one/penalties/{}", Uuid::new_v4()),
    ];
    for uri in &uris {
        let (status, body) = send(&app, "DELETE", uri, Some(session), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}: {}", uri, body);
    }

    let (status, body) = send(&app, "GET", "/api/scoreboard/teams/x/top", Some(session), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        "GET",
        "/api/scoreboard/teams/1/top?n=many",
        Some(session),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_json_body_returns_json_error() {
    let app = setup_app();
    let session = create_session(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/scoreboard/players")
        .header(SESSION_HEADER, session.to_string())
        .header("content-type", "application/json")
        .body(Body::from("{\"team\": 1, \"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    // well-formed JSON with a missing field
    let (status, body) = send(
        &app,
        "POST",
        "/api/scoreboard/penalties",
        Some(session),
        Some(json!({ "team": 1, "description": "late" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("amount"));

    let (status, body) = send(&app, "POST", "/api/charts", None, Some(json!({ "input": "1,2" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (_, snapshot) = send(&app, "GET", "/api/scoreboard", Some(session), None).await;
    assert_eq!(snapshot["teams"][0]["players"], json!([]));
    assert_eq!(snapshot["teams"][0]["penalties"], json!([]));
}

#[tokio::test]
async fn test_remove_player_by_id() {
    let app = setup_app();
    let session = create_session(&app).await;
    add_player(&app, session, 1, "Ana", 1, 3).await;
    let duplicate = add_player(&app, session, 1, "Ana", 1, 3).await;
    let id = duplicate["record"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/scoreboard/teams/1/players/{}", id),
        Some(session),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted Ana from Team 1");

    let (_, snapshot) = send(&app, "GET", "/api/scoreboard", Some(session), None).await;
    let players = snapshot["teams"][0]["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_ne!(players[0]["id"], id);
}

#[tokio::test]
async fn test_remove_missing_record_returns_404() {
    let app = setup_app();
    let session = create_session(&app).await;
    add_player(&app, session, 2, "Bo", 0, 4).await;

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/scoreboard/teams/2/players/{}", Uuid::new_v4()),
        Some(session),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/scoreboard/teams/2/penalties/{}", Uuid::new_v4()),
        Some(session),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(session), None).await;
    assert_eq!(winner["team2_total"], 4);
}

#[tokio::test]
async fn test_update_player_scores() {
    let app = setup_app();
    let session = create_session(&app).await;
    let ana = add_player(&app, session, 1, "Ana", 10, 15).await;
    let id = ana["record"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/scoreboard/teams/1/players/{}", id),
        Some(session),
        Some(json!({ "score_before": 10, "score_after": 40 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["difference"], 30);
    assert_eq!(body["record"]["id"], id);
}

#[tokio::test]
async fn test_move_player_between_teams() {
    let app = setup_app();
    let session = create_session(&app).await;
    let ana = add_player(&app, session, 1, "Ana", 0, 5).await;
    let id = ana["record"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/scoreboard/teams/1/players/{}/move", id),
        Some(session),
        Some(json!({ "to_team": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Moved Ana to Team 2");

    let (_, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(session), None).await;
    assert_eq!(winner["team1_total"], 0);
    assert_eq!(winner["team2_total"], 5);

    // moving again from the old team finds nothing
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/scoreboard/teams/1/players/{}/move", id),
        Some(session),
        Some(json!({ "to_team": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_top_players_preserves_insertion_order_on_ties() {
    let app = setup_app();
    let session = create_session(&app).await;
    add_player(&app, session, 1, "Ana", 10, 15).await;
    add_player(&app, session, 1, "Bo", 0, 5).await;
    add_player(&app, session, 1, "Cy", 0, 1).await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/scoreboard/teams/1/top?n=2",
        Some(session),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Bo"]);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = setup_app();
    let first = create_session(&app).await;
    let second = create_session(&app).await;

    add_player(&app, first, 1, "Ana", 0, 9).await;

    let (_, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(second), None).await;
    assert_eq!(winner["winner"], "tie");
    assert_eq!(winner["team1_total"], 0);
}

#[tokio::test]
async fn test_end_session_discards_scoreboard() {
    let app = setup_app();
    let session = create_session(&app).await;
    add_player(&app, session, 1, "Ana", 0, 9).await;

    let (status, _) = send(&app, "DELETE", "/api/sessions", Some(session), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/api/sessions", Some(session), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the next access starts a fresh scoreboard
    let (_, winner) = send(&app, "GET", "/api/scoreboard/winner", Some(session), None).await;
    assert_eq!(winner["team1_total"], 0);
}

#[tokio::test]
async fn test_chart_calculation() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/charts",
        None,
        Some(json!({
            "input": "1\n2\n3\n4",
            "operation": "Cumulative Sum",
            "chart": "Bar Chart"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "cumulative_sum");
    assert_eq!(body["result"], json!([1.0, 3.0, 6.0, 10.0]));
    assert_eq!(body["statistics"]["median"], 2.5);
    assert_eq!(body["series"]["kind"], "bar");
    assert_eq!(body["series"]["title"], "Cumulative Sum Visualization");
    assert_eq!(body["series"]["points"][3], json!({ "x": 3.0, "y": 4.0 }));
}

#[tokio::test]
async fn test_chart_with_transform() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/charts",
        None,
        Some(json!({
            "input": "2, 4",
            "operation": "Sum",
            "transform": { "op": "multiply", "value": 10.0 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 60.0);
    assert_eq!(body["series"]["kind"], "line");
}

#[tokio::test]
async fn test_chart_invalid_input() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/charts",
        None,
        Some(json!({ "input": "1\nx", "operation": "Sum" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Please enter valid numbers"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/charts",
        None,
        Some(json!({ "input": "1", "operation": "Sum", "transform": { "op": "divide", "value": 0.0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Division by zero is not allowed");
}
