//! Registration preconditions and operation outcomes.
//!
//! The four state-changing operations (join, leave, draw, respond) each
//! return a discriminated outcome. Business-rule rejections -- capacity
//! reached, already joined, wrong state -- are expected results, surfaced
//! as enum variants rather than errors; callers branch on the
//! discriminant. Only store and infrastructure failures travel the
//! `Err` path.

use serde::Serialize;

use crate::decision::DecisionStatus;
use crate::types::{DbId, Timestamp};

/// Whether the registration window is currently open.
///
/// A missing bound is treated as unbounded on that side.
pub fn registration_window_open(
    now: Timestamp,
    opens_at: Option<Timestamp>,
    closes_at: Option<Timestamp>,
) -> bool {
    if let Some(opens) = opens_at {
        if now < opens {
            return false;
        }
    }
    if let Some(closes) = closes_at {
        if now >= closes {
            return false;
        }
    }
    true
}

/// Whether another entrant fits under the event's capacity.
///
/// `capacity = None` means the waitlist is unbounded.
pub fn capacity_available(capacity: Option<i64>, live_count: i64) -> bool {
    match capacity {
        Some(cap) => live_count < cap,
        None => true,
    }
}

/// Result of a join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum JoinOutcome {
    /// A new entry and pending decision were created.
    Joined { entry_id: DbId, decision_id: DbId },
    /// A live entry already exists for this entrant; nothing changed.
    AlreadyJoined,
    /// The waitlist is at capacity.
    CapacityReached,
    /// The event is not open or the window is not active.
    RegistrationClosed,
}

/// Result of a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LeaveOutcome {
    /// The entry was removed and the decision voided.
    Left,
    /// No live entry exists for this entrant.
    NotFound,
    /// The entrant's decision has already moved past pending.
    InvalidState { current: DecisionStatus },
}

/// Result of a lottery draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DrawOutcome {
    /// The draw committed: `invited` winners, `not_selected` the rest.
    Drawn { invited: i64, not_selected: i64 },
    /// The event has already been drawn (or closed).
    AlreadyDrawn,
    /// No pending entrants to draw from.
    NoPendingEntrants,
    /// `winner_quota` is zero or negative.
    InvalidQuota,
}

/// Result of an invited entrant's accept/decline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RespondOutcome {
    /// The response was recorded.
    Recorded { status: DecisionStatus },
    /// No decision with that id exists.
    NotFound,
    /// The decision is not currently invited.
    InvalidState { current: DecisionStatus },
}
