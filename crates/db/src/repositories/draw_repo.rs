//! The lottery draw transaction.
//!
//! A draw locks the event row, which serialises it against concurrent
//! joins and against a second draw of the same event. Winner selection
//! happens in memory over the locked pending set; all decision
//! transitions and the event's `open -> drawn` flip commit atomically,
//! so observers see either the pre-draw or the post-draw world, never a
//! half-drawn one.

use drawlist_core::decision::DecisionStatus;
use drawlist_core::lottery::select_winners;
use drawlist_core::registration::DrawOutcome;
use drawlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{EVENT_STATUS_DRAWN, EVENT_STATUS_OPEN};
use crate::repositories::RegistrationRepo;
use crate::{retry, StoreError};

/// Runs the lottery draw.
pub struct DrawRepo;

impl DrawRepo {
    /// Draw winners for an event.
    ///
    /// Picks `winner_quota` entrants uniformly at random from the
    /// pending pool (everyone, when the pool is smaller than the
    /// quota), invites them, marks the rest `not_selected`, and flips
    /// the event to `drawn`. Repeat draws report [`DrawOutcome::AlreadyDrawn`].
    pub async fn draw(pool: &PgPool, event_id: DbId) -> Result<DrawOutcome, StoreError> {
        retry::with_conflict_retry("lottery.draw", || Self::draw_once(pool, event_id)).await
    }

    async fn draw_once(pool: &PgPool, event_id: DbId) -> Result<DrawOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let event = RegistrationRepo::lock_event(&mut tx, event_id).await?;

        if event.status != EVENT_STATUS_OPEN {
            return Ok(DrawOutcome::AlreadyDrawn);
        }
        if event.winner_quota <= 0 {
            return Ok(DrawOutcome::InvalidQuota);
        }

        // Stable ordering so the in-memory index selection maps back to
        // a well-defined id set.
        let pending: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM decisions
             WHERE event_id = $1 AND status = 'pending'
             ORDER BY id
             FOR UPDATE",
        )
        .bind(event_id)
        .fetch_all(&mut *tx)
        .await?;

        if pending.is_empty() {
            return Ok(DrawOutcome::NoPendingEntrants);
        }

        // ThreadRng stays inside this block; it must not be held across
        // an await.
        let winner_indices = {
            let mut rng = rand::rng();
            select_winners(pending.len(), event.winner_quota as usize, &mut rng)
        };
        let winner_ids: Vec<DbId> = winner_indices.iter().map(|&i| pending[i]).collect();

        let invited = sqlx::query(
            "UPDATE decisions SET status = $2, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(&winner_ids)
        .bind(DecisionStatus::Invited.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let not_selected = sqlx::query(
            "UPDATE decisions SET status = $2, updated_at = NOW()
             WHERE event_id = $1 AND status = 'pending'",
        )
        .bind(event_id)
        .bind(DecisionStatus::NotSelected.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("UPDATE events SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(event_id)
            .bind(EVENT_STATUS_DRAWN)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DrawOutcome::Drawn {
            invited: invited as i64,
            not_selected: not_selected as i64,
        })
    }
}
