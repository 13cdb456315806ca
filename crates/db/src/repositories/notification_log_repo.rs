//! Notification audit log store.

use drawlist_core::types::{DbId, EntrantId};
use sqlx::PgPool;

use crate::models::notification::NotificationLogEntry;

const COLUMNS: &str = "id, event_id, entrant_id, kind, title, body, delivered, created_at";

/// Write/read access to the per-entrant delivery audit log.
pub struct NotificationLogRepo;

impl NotificationLogRepo {
    /// Record one delivery attempt for one entrant.
    pub async fn record(
        pool: &PgPool,
        event_id: DbId,
        entrant_id: EntrantId,
        kind: &str,
        title: &str,
        body: &str,
        delivered: bool,
    ) -> Result<NotificationLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_log (event_id, entrant_id, kind, title, body, delivered)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as(&query)
            .bind(event_id)
            .bind(entrant_id)
            .bind(kind)
            .bind(title)
            .bind(body)
            .bind(delivered)
            .fetch_one(pool)
            .await
    }

    /// All attempts for an event, newest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<NotificationLogEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM notification_log WHERE event_id = $1 ORDER BY id DESC");
        sqlx::query_as(&query).bind(event_id).fetch_all(pool).await
    }
}
