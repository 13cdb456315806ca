//! Decision model: the per-entrant lottery outcome record.

use drawlist_core::decision::DecisionStatus;
use drawlist_core::types::{DbId, EntrantId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `decisions` table.
///
/// Exactly one live (pending/invited) decision exists per live waitlist
/// entry. Terminal and voided rows persist as the audit trail;
/// `entry_id` goes `NULL` when the backing entry is deleted on leave.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Decision {
    pub id: DbId,
    pub event_id: DbId,
    pub entrant_id: EntrantId,
    pub entry_id: Option<DbId>,
    pub status: String,
    pub responded_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Decision {
    /// Parse the stored status string into the closed status set.
    ///
    /// The `ck_decisions_status` constraint keeps the column within the
    /// set, so a parse failure means schema drift.
    pub fn parsed_status(&self) -> Result<DecisionStatus, drawlist_core::CoreError> {
        self.status.parse()
    }
}
