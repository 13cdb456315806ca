//! HTTP-level integration tests for the draw and respond endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_event_via_api, post_as, post_empty, post_json};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Join `n` fresh entrants to an event through the API.
async fn join_n(app: &axum::Router, event_id: i64, n: usize) {
    let uri = format!("/api/v1/events/{event_id}/waitlist");
    for _ in 0..n {
        let response = post_as(app.clone(), &uri, Uuid::new_v4()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

/// Draw an event and return the decision id of one invited entrant.
async fn drawn_decision_id(app: &axum::Router, event_id: i64) -> i64 {
    let response = post_empty(app.clone(), &format!("/api/v1/events/{event_id}/draw")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::get(
        app.clone(),
        &format!("/api/v1/events/{event_id}/entrants?status=invited"),
    )
    .await;
    let json = body_json(response).await;
    json["data"][0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: draw splits the pool into invited and not selected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draw_returns_counts(pool: PgPool) {
    let app = build_test_app(pool);
    let event_id = create_event_via_api(app.clone(), "Draw API", None, 2).await;
    join_n(&app, event_id, 5).await;

    let response = post_empty(app.clone(), &format!("/api/v1/events/{event_id}/draw")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "drawn");
    assert_eq!(json["data"]["invited"], 2);
    assert_eq!(json["data"]["not_selected"], 3);

    // The event is now drawn and joins are refused.
    let response = post_as(
        app,
        &format!("/api/v1/events/{event_id}/waitlist"),
        Uuid::new_v4(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: a repeat draw is 409, draw on empty pool is 422
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draw_refusals(pool: PgPool) {
    let app = build_test_app(pool);

    let event_id = create_event_via_api(app.clone(), "Repeat Draw", None, 1).await;
    join_n(&app, event_id, 2).await;
    post_empty(app.clone(), &format!("/api/v1/events/{event_id}/draw")).await;

    let response = post_empty(app.clone(), &format!("/api/v1/events/{event_id}/draw")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "already_drawn");

    let empty_event = create_event_via_api(app.clone(), "Empty Draw", None, 1).await;
    let response = post_empty(app.clone(), &format!("/api/v1/events/{empty_event}/draw")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "no_pending_entrants");

    // Missing event is a plain 404.
    let response = post_empty(app, "/api/v1/events/424242/draw").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: accept records and confirms, decline records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_accept_invitation(pool: PgPool) {
    let app = build_test_app(pool);
    let event_id = create_event_via_api(app.clone(), "Accept API", None, 1).await;
    join_n(&app, event_id, 1).await;
    let decision_id = drawn_decision_id(&app, event_id).await;

    let response = post_json(
        app,
        &format!("/api/v1/decisions/{decision_id}/respond"),
        serde_json::json!({"choice": "accept"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "recorded");
    assert_eq!(json["data"]["status"], "accepted");
}

// ---------------------------------------------------------------------------
// Test: the first response wins, the second is 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_response_conflicts(pool: PgPool) {
    let app = build_test_app(pool);
    let event_id = create_event_via_api(app.clone(), "Double Respond API", None, 1).await;
    join_n(&app, event_id, 1).await;
    let decision_id = drawn_decision_id(&app, event_id).await;
    let uri = format!("/api/v1/decisions/{decision_id}/respond");

    let response = post_json(app.clone(), &uri, serde_json::json!({"choice": "decline"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app, &uri, serde_json::json!({"choice": "accept"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "invalid_state");
    assert_eq!(json["data"]["current"], "declined");
}

// ---------------------------------------------------------------------------
// Test: responding to an unknown decision is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_respond_unknown_decision(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/decisions/424242/respond",
        serde_json::json!({"choice": "accept"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "not_found");
}
