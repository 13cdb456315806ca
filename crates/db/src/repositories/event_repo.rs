//! Repository for the `events` table.

use drawlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EVENT_STATUS_CLOSED};

/// Column list for events queries.
pub(crate) const COLUMNS: &str = "id, name, capacity, winner_quota, \
    registration_opens_at, registration_closes_at, status, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (name, capacity, winner_quota, registration_opens_at, registration_closes_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(input.winner_quota)
            .bind(input.registration_opens_at)
            .bind(input.registration_closes_at)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Close an event to further activity.
    ///
    /// Returns `true` if the event existed and was not already closed.
    pub async fn close(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status != $2",
        )
        .bind(id)
        .bind(EVENT_STATUS_CLOSED)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
