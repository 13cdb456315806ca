//! Repository for the `decisions` table (reads).
//!
//! Status transitions go through the [`DrawRepo`](super::DrawRepo),
//! [`RespondRepo`](super::RespondRepo), and
//! [`RegistrationRepo`](super::RegistrationRepo) transactions only.

use drawlist_core::decision::DecisionStatus;
use drawlist_core::types::{DbId, EntrantId};
use sqlx::PgPool;

use crate::models::decision::Decision;

/// Column list for decisions queries.
pub(crate) const COLUMNS: &str =
    "id, event_id, entrant_id, entry_id, status, responded_at, created_at, updated_at";

/// Provides read operations for decision records.
pub struct DecisionRepo;

impl DecisionRepo {
    /// Find a decision by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Decision>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decisions WHERE id = $1");
        sqlx::query_as::<_, Decision>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List decisions for an event, optionally filtered by status.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
        status: Option<DecisionStatus>,
    ) -> Result<Vec<Decision>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM decisions
                     WHERE event_id = $1 AND status = $2
                     ORDER BY created_at ASC"
                );
                sqlx::query_as::<_, Decision>(&query)
                    .bind(event_id)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM decisions
                     WHERE event_id = $1
                     ORDER BY created_at ASC"
                );
                sqlx::query_as::<_, Decision>(&query)
                    .bind(event_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// The live (non-terminal) decision for an entrant, if any.
    pub async fn find_live_for_entrant(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
    ) -> Result<Option<Decision>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM decisions
             WHERE event_id = $1 AND entrant_id = $2
               AND status IN ('pending', 'invited')"
        );
        sqlx::query_as::<_, Decision>(&query)
            .bind(event_id)
            .bind(entrant_id)
            .fetch_optional(pool)
            .await
    }

    /// Entrant ids currently holding the given status for an event.
    ///
    /// Used by the dispatcher to expand group notification targets at
    /// dispatch time, so the fan-out reflects current state rather than
    /// the state at enqueue time.
    pub async fn entrants_with_status(
        pool: &PgPool,
        event_id: DbId,
        status: DecisionStatus,
    ) -> Result<Vec<EntrantId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT entrant_id FROM decisions WHERE event_id = $1 AND status = $2",
        )
        .bind(event_id)
        .bind(status.as_str())
        .fetch_all(pool)
        .await
    }
}
