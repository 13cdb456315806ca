//! Waitlist entry model: the membership ledger.

use drawlist_core::types::{DbId, EntrantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `waitlist_entries` table.
///
/// At most one live row exists per `(event_id, entrant_id)`; the row is
/// deleted when the entrant leaves while still pending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitlistEntry {
    pub id: DbId,
    pub event_id: DbId,
    pub entrant_id: EntrantId,
    pub joined_at: Timestamp,
    pub join_latitude: Option<f64>,
    pub join_longitude: Option<f64>,
    pub created_at: Timestamp,
}

/// Request body for joining a waitlist.
///
/// The optional coordinates record where the entrant joined from, when
/// the event asks for it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinRequest {
    pub join_latitude: Option<f64>,
    pub join_longitude: Option<f64>,
}
