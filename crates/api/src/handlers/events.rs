//! Handlers for the organizer-facing event endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use drawlist_core::decision::DecisionStatus;
use drawlist_core::error::CoreError;
use drawlist_core::types::DbId;
use drawlist_db::models::event::{CreateEvent, EVENT_STATUS_CLOSED};
use drawlist_db::repositories::{DecisionRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events
///
/// Create a new event. Registration opens immediately unless an opening
/// time is given.
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event name must not be empty".into(),
        )));
    }
    if input.winner_quota < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "winner_quota must not be negative".into(),
        )));
    }
    if input.capacity.is_some_and(|c| c < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "capacity must not be negative".into(),
        )));
    }

    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, name = %event.name, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events
pub async fn list_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(DataResponse { data: event }))
}

/// Query parameters for the entrants listing.
#[derive(Debug, Deserialize)]
pub struct EntrantsQuery {
    /// Filter by decision status (e.g. `invited`, `pending`).
    pub status: Option<String>,
}

/// GET /api/v1/events/{id}/entrants?status=
///
/// Organizer view of every decision record for the event, optionally
/// filtered by status.
pub async fn list_entrants(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<EntrantsQuery>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state, id).await?;

    let status = match query.status.as_deref() {
        Some(s) => Some(
            s.parse::<DecisionStatus>()
                .map_err(|_| AppError::BadRequest(format!("Unknown status filter: {s}")))?,
        ),
        None => None,
    };

    let decisions = DecisionRepo::list_for_event(&state.pool, id, status).await?;
    Ok(Json(DataResponse { data: decisions }))
}

/// POST /api/v1/events/{id}/close
///
/// Close an event to further registration and draws.
pub async fn close_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let closed = EventRepo::close(&state.pool, id).await?;
    if !closed {
        let event = EventRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Event",
                id,
            }))?;
        if event.status == EVENT_STATUS_CLOSED {
            return Err(AppError::Core(CoreError::Conflict(
                "Event is already closed".into(),
            )));
        }
    }

    tracing::info!(event_id = id, "Event closed");

    Ok(StatusCode::NO_CONTENT)
}

/// Return 404 unless the event exists.
pub(crate) async fn ensure_event_exists(state: &AppState, id: DbId) -> AppResult<()> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(())
}
