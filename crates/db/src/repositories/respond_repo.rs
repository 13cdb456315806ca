//! Recording an invited entrant's accept or decline.

use drawlist_core::decision::{DecisionStatus, RespondChoice};
use drawlist_core::registration::RespondOutcome;
use drawlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::decision::Decision;
use crate::repositories::{decision_repo, parse_status};
use crate::{retry, StoreError};

/// Records responses to invitations.
pub struct RespondRepo;

impl RespondRepo {
    /// Record an accept or decline for an invited decision.
    ///
    /// Only `invited` decisions can transition; a second response (or a
    /// response to a decision that was never invited) reports the
    /// current status back without touching the row.
    pub async fn respond(
        pool: &PgPool,
        decision_id: DbId,
        choice: RespondChoice,
    ) -> Result<RespondOutcome, StoreError> {
        retry::with_conflict_retry("response.record", || {
            Self::respond_once(pool, decision_id, choice)
        })
        .await
    }

    async fn respond_once(
        pool: &PgPool,
        decision_id: DbId,
        choice: RespondChoice,
    ) -> Result<RespondOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {} FROM decisions WHERE id = $1 FOR UPDATE",
            decision_repo::COLUMNS
        );
        let decision: Option<Decision> = sqlx::query_as(&query)
            .bind(decision_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(decision) = decision else {
            return Ok(RespondOutcome::NotFound);
        };

        let current = parse_status(&decision.status)?;
        if current != DecisionStatus::Invited {
            return Ok(RespondOutcome::InvalidState { current });
        }

        let status = choice.resulting_status();
        sqlx::query(
            "UPDATE decisions SET status = $2, responded_at = NOW(), updated_at = NOW()
             WHERE id = $1",
        )
            .bind(decision_id)
            .bind(status.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(RespondOutcome::Recorded { status })
    }
}
