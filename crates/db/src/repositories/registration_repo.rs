//! Join and leave: the registration coordinator's transactions.
//!
//! Each operation is one atomic transaction. Join locks the event row
//! with `FOR UPDATE`, which serialises the capacity check per event: two
//! concurrent joins cannot both observe a free slot and both insert past
//! the limit. The `uq_waitlist_entries_event_entrant` constraint backs
//! the duplicate check at the store level.

use chrono::Utc;
use drawlist_core::decision::DecisionStatus;
use drawlist_core::registration::{
    capacity_available, registration_window_open, JoinOutcome, LeaveOutcome,
};
use drawlist_core::types::{DbId, EntrantId};
use sqlx::PgPool;

use crate::models::entry::JoinRequest;
use crate::models::event::{Event, EVENT_STATUS_OPEN};
use crate::repositories::{decision_repo, event_repo, parse_status};
use crate::{retry, StoreError};

use crate::models::decision::Decision;

/// Provides the join/leave transactions.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Join an event's waitlist.
    ///
    /// Creates a waitlist entry and its paired pending decision in one
    /// transaction, after checking event status, registration window,
    /// duplicate membership, and capacity. Re-joining while already on
    /// the list is idempotent, not an error.
    pub async fn join(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
        request: &JoinRequest,
    ) -> Result<JoinOutcome, StoreError> {
        retry::with_conflict_retry("registration.join", || {
            Self::join_once(pool, event_id, entrant_id, request)
        })
        .await
    }

    async fn join_once(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
        request: &JoinRequest,
    ) -> Result<JoinOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the event row for the duration of the transaction. All
        // joins (and the draw) on this event serialise here.
        let event = Self::lock_event(&mut tx, event_id).await?;

        let window_open = registration_window_open(
            Utc::now(),
            event.registration_opens_at,
            event.registration_closes_at,
        );
        if event.status != EVENT_STATUS_OPEN || !window_open {
            return Ok(JoinOutcome::RegistrationClosed);
        }

        let existing: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM waitlist_entries WHERE event_id = $1 AND entrant_id = $2",
        )
        .bind(event_id)
        .bind(entrant_id)
        .fetch_optional(&mut *tx)
        .await?;
        if existing.is_some() {
            return Ok(JoinOutcome::AlreadyJoined);
        }

        let live_count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM waitlist_entries WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await?;
        if !capacity_available(event.capacity, live_count.0) {
            return Ok(JoinOutcome::CapacityReached);
        }

        let entry_id: DbId = sqlx::query_scalar(
            "INSERT INTO waitlist_entries (event_id, entrant_id, join_latitude, join_longitude)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(event_id)
        .bind(entrant_id)
        .bind(request.join_latitude)
        .bind(request.join_longitude)
        .fetch_one(&mut *tx)
        .await?;

        let decision_id: DbId = sqlx::query_scalar(
            "INSERT INTO decisions (event_id, entrant_id, entry_id)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(event_id)
        .bind(entrant_id)
        .bind(entry_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(JoinOutcome::Joined {
            entry_id,
            decision_id,
        })
    }

    /// Leave an event's waitlist.
    ///
    /// Permitted only while the entrant's decision is still pending. The
    /// entry is deleted and the decision voided to `cancelled` in one
    /// transaction; an entrant who has been invited or has decided can
    /// no longer silently disappear from the record.
    pub async fn leave(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
    ) -> Result<LeaveOutcome, StoreError> {
        retry::with_conflict_retry("registration.leave", || {
            Self::leave_once(pool, event_id, entrant_id)
        })
        .await
    }

    async fn leave_once(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
    ) -> Result<LeaveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // `entry_id` is only set while the backing entry exists, so this
        // matches the decision attached to the live entry and skips
        // voided rows from earlier leave/rejoin cycles.
        let query = format!(
            "SELECT {} FROM decisions
             WHERE event_id = $1 AND entrant_id = $2 AND entry_id IS NOT NULL
             FOR UPDATE",
            decision_repo::COLUMNS
        );
        let decision: Option<Decision> = sqlx::query_as(&query)
            .bind(event_id)
            .bind(entrant_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(decision) = decision else {
            return Ok(LeaveOutcome::NotFound);
        };

        let current = parse_status(&decision.status)?;
        if current != DecisionStatus::Pending {
            return Ok(LeaveOutcome::InvalidState { current });
        }

        sqlx::query("DELETE FROM waitlist_entries WHERE event_id = $1 AND entrant_id = $2")
            .bind(event_id)
            .bind(entrant_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE decisions SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(decision.id)
            .bind(DecisionStatus::Cancelled.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LeaveOutcome::Left)
    }

    /// Read and lock an event row inside a transaction.
    pub(crate) async fn lock_event(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event_id: DbId,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM events WHERE id = $1 FOR UPDATE",
            event_repo::COLUMNS
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
