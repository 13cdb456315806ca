//! Repository for the `waitlist_entries` table (point/range reads).
//!
//! Writes go through [`RegistrationRepo`](super::RegistrationRepo) only.

use drawlist_core::types::{DbId, EntrantId};
use sqlx::PgPool;

use crate::models::entry::WaitlistEntry;

/// Column list for waitlist_entries queries.
const COLUMNS: &str =
    "id, event_id, entrant_id, joined_at, join_latitude, join_longitude, created_at";

/// Provides read operations for waitlist entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Find the live entry for an entrant on an event, if any.
    pub async fn find_live(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waitlist_entries
             WHERE event_id = $1 AND entrant_id = $2"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(event_id)
            .bind(entrant_id)
            .fetch_optional(pool)
            .await
    }

    /// List all live entries for an event, oldest join first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waitlist_entries
             WHERE event_id = $1
             ORDER BY joined_at ASC"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Count live entries for an event.
    pub async fn count_live(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM waitlist_entries WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Entrant ids of everyone currently on the waitlist.
    ///
    /// Used by the dispatcher to expand "all waitlisted" notification
    /// targets at dispatch time.
    pub async fn live_entrants(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EntrantId>, sqlx::Error> {
        sqlx::query_scalar("SELECT entrant_id FROM waitlist_entries WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
