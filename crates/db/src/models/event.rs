//! Event model: the capacity-limited thing entrants register for.
//!
//! Events are owned by the organizer surface; the registration core only
//! reads capacity/quota/window and transitions `status` during a draw.

use drawlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registration is open; entrants may join and a draw may run.
pub const EVENT_STATUS_OPEN: &str = "open";

/// The lottery has been drawn; no new joins.
pub const EVENT_STATUS_DRAWN: &str = "drawn";

/// The organizer closed the event.
pub const EVENT_STATUS_CLOSED: &str = "closed";

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    /// Maximum live waitlist entries; `None` means unbounded.
    pub capacity: Option<i64>,
    /// Number of invitations handed out per draw.
    pub winner_quota: i32,
    pub registration_opens_at: Option<Timestamp>,
    pub registration_closes_at: Option<Timestamp>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub capacity: Option<i64>,
    pub winner_quota: i32,
    pub registration_opens_at: Option<Timestamp>,
    pub registration_closes_at: Option<Timestamp>,
}
