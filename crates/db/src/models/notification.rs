//! Notification audit log model.

use drawlist_core::types::{DbId, EntrantId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notification_log` table.
///
/// One row per `(intent, entrant)` pair, written by the dispatcher after
/// a delivery attempt. `delivered = false` records a best-effort failure
/// that did not (and must not) roll back the triggering state change.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationLogEntry {
    pub id: DbId,
    pub event_id: DbId,
    pub entrant_id: EntrantId,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub delivered: bool,
    pub created_at: Timestamp,
}
