//! Handler for running the lottery draw.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use drawlist_core::error::CoreError;
use drawlist_core::registration::DrawOutcome;
use drawlist_core::types::DbId;
use drawlist_db::repositories::{DrawRepo, EventRepo};
use drawlist_events::NotificationIntent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events/{id}/draw
///
/// Run the lottery. On success the winner and non-winner notification
/// intents are published after the transaction has committed.
pub async fn draw(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let outcome = DrawRepo::draw(&state.pool, event_id).await?;

    let status = match &outcome {
        DrawOutcome::Drawn {
            invited,
            not_selected,
        } => {
            tracing::info!(
                event_id,
                invited = *invited,
                not_selected = *not_selected,
                "Lottery drawn"
            );
            // The draw is durable at this point; the intents only carry
            // the news.
            state
                .intent_bus
                .publish(NotificationIntent::invited(event_id, &event.name));
            if *not_selected > 0 {
                state
                    .intent_bus
                    .publish(NotificationIntent::not_selected(event_id, &event.name));
            }
            StatusCode::OK
        }
        DrawOutcome::AlreadyDrawn => StatusCode::CONFLICT,
        DrawOutcome::NoPendingEntrants | DrawOutcome::InvalidQuota => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    Ok((status, Json(DataResponse { data: outcome })))
}
