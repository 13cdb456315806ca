//! Handler for recording an invited entrant's accept/decline.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use drawlist_core::decision::{DecisionStatus, RespondChoice};
use drawlist_core::registration::RespondOutcome;
use drawlist_core::types::DbId;
use drawlist_db::repositories::{DecisionRepo, EventRepo, RespondRepo};
use drawlist_events::NotificationIntent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for responding to an invitation.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub choice: RespondChoice,
}

/// POST /api/v1/decisions/{id}/respond
///
/// Record an accept or decline. The first response wins; anything after
/// that reports the standing status as a conflict.
pub async fn respond(
    State(state): State<AppState>,
    Path(decision_id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = RespondRepo::respond(&state.pool, decision_id, input.choice).await?;

    let status = match &outcome {
        RespondOutcome::Recorded { status } => {
            tracing::info!(decision_id, status = %status, "Invitation response recorded");
            if *status == DecisionStatus::Accepted {
                publish_confirmation(&state, decision_id).await;
            }
            StatusCode::OK
        }
        RespondOutcome::NotFound => StatusCode::NOT_FOUND,
        RespondOutcome::InvalidState { .. } => StatusCode::CONFLICT,
    };

    Ok((status, Json(DataResponse { data: outcome })))
}

/// Publish the spot-confirmed intent for an accepted decision.
///
/// The response is already committed; a failure here is logged and not
/// surfaced to the client.
async fn publish_confirmation(state: &AppState, decision_id: DbId) {
    match lookup_decision_event(state, decision_id).await {
        Ok(Some((decision, event))) => {
            state.intent_bus.publish(NotificationIntent::accepted(
                event.id,
                &event.name,
                decision.entrant_id,
            ));
        }
        Ok(None) => {
            tracing::warn!(decision_id, "Accepted decision vanished before confirmation");
        }
        Err(e) => {
            tracing::error!(decision_id, error = %e, "Failed to build confirmation intent");
        }
    }
}

async fn lookup_decision_event(
    state: &AppState,
    decision_id: DbId,
) -> Result<
    Option<(
        drawlist_db::models::decision::Decision,
        drawlist_db::models::event::Event,
    )>,
    sqlx::Error,
> {
    let Some(decision) = DecisionRepo::find_by_id(&state.pool, decision_id).await? else {
        return Ok(None);
    };
    let event = EventRepo::find_by_id(&state.pool, decision.event_id).await?;
    Ok(event.map(|e| (decision, e)))
}
