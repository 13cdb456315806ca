//! Handlers for organizer broadcasts and the delivery audit log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use drawlist_core::error::CoreError;
use drawlist_core::types::DbId;
use drawlist_db::repositories::NotificationLogRepo;
use drawlist_events::NotificationIntent;

use crate::error::{AppError, AppResult};
use crate::handlers::events::ensure_event_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for an organizer broadcast.
#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    pub title: String,
    pub body: String,
}

/// POST /api/v1/events/{id}/notifications
///
/// Queue a custom broadcast to everyone currently on the waitlist. The
/// target set is expanded when the dispatcher handles the intent, not
/// here.
pub async fn broadcast(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<BroadcastRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state, event_id).await?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Broadcast title must not be empty".into(),
        )));
    }

    state
        .intent_bus
        .publish(NotificationIntent::custom(event_id, input.title, input.body));

    tracing::info!(event_id, "Organizer broadcast queued");

    Ok(StatusCode::ACCEPTED)
}

/// GET /api/v1/events/{id}/notifications
///
/// The per-entrant delivery audit log, newest first.
pub async fn list_log(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state, event_id).await?;

    let log = NotificationLogRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: log }))
}
