//! Handlers for joining and leaving an event's waitlist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use drawlist_core::registration::{JoinOutcome, LeaveOutcome};
use drawlist_core::types::DbId;
use drawlist_db::models::entry::JoinRequest;
use drawlist_db::repositories::RegistrationRepo;

use crate::error::AppResult;
use crate::extract::Entrant;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events/{id}/waitlist
///
/// Join the waitlist. The outcome discriminant picks the status code;
/// re-joining is a 200, a full or closed list is a 409.
pub async fn join(
    entrant: Entrant,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(request): Json<JoinRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = RegistrationRepo::join(&state.pool, event_id, entrant.id, &request).await?;

    let status = match &outcome {
        JoinOutcome::Joined { .. } => {
            tracing::info!(event_id, entrant_id = %entrant.id, "Entrant joined waitlist");
            StatusCode::CREATED
        }
        JoinOutcome::AlreadyJoined => StatusCode::OK,
        JoinOutcome::CapacityReached | JoinOutcome::RegistrationClosed => StatusCode::CONFLICT,
    };

    Ok((status, Json(DataResponse { data: outcome })))
}

/// DELETE /api/v1/events/{id}/waitlist
///
/// Leave the waitlist. Only a still-pending entrant can leave; after the
/// draw the decision record is locked in.
pub async fn leave(
    entrant: Entrant,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = RegistrationRepo::leave(&state.pool, event_id, entrant.id).await?;

    let status = match &outcome {
        LeaveOutcome::Left => {
            tracing::info!(event_id, entrant_id = %entrant.id, "Entrant left waitlist");
            StatusCode::OK
        }
        LeaveOutcome::NotFound => StatusCode::NOT_FOUND,
        LeaveOutcome::InvalidState { .. } => StatusCode::CONFLICT,
    };

    Ok((status, Json(DataResponse { data: outcome })))
}
