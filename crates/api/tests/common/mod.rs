use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use drawlist_api::config::ServerConfig;
use drawlist_api::router::build_router;
use drawlist_api::state::AppState;
use drawlist_events::IntentBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        push_gateway_url: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Same construction as `main.rs` (via `build_router`), so integration
/// tests exercise the production middleware stack. No dispatcher task is
/// spawned; published intents are simply dropped.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        intent_bus: Arc::new(IntentBus::default()),
    };
    build_router(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with an empty JSON object body, identifying as
/// the given entrant.
pub async fn post_as(app: Router, uri: &str, entrant: Uuid) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("x-entrant-id", entrant.to_string())
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request identifying as the given entrant.
pub async fn delete_as(app: Router, uri: &str, entrant: Uuid) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("x-entrant-id", entrant.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a bodyless POST request (no entrant identity).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read and parse a JSON response body.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an event via the API and return its id.
pub async fn create_event_via_api(
    app: Router,
    name: &str,
    capacity: Option<i64>,
    winner_quota: i32,
) -> i64 {
    let response = post_json(
        app,
        "/api/v1/events",
        serde_json::json!({
            "name": name,
            "capacity": capacity,
            "winner_quota": winner_quota,
            "registration_opens_at": null,
            "registration_closes_at": null,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
