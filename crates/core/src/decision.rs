//! The per-entrant decision state machine.
//!
//! A `Decision` records where an entrant stands for one event. Statuses
//! form a closed set and only move forward through the transition table
//! in [`DecisionStatus::can_transition_to`] -- there are no backward
//! transitions, and every mutating store operation checks the table (or
//! an equivalent SQL status guard) at its boundary. Callers must derive
//! the actions available to an entrant from the current status, never
//! assume them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of an entrant's decision record for one event.
///
/// Lifecycle: `Pending` is the initial state set on join. The lottery
/// draw moves entrants to `Invited` or `NotSelected`; an invited entrant
/// responds with `Accepted` or `Declined`. `Cancelled` voids a record
/// (entrant left while pending, or organizer cancellation of an invite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Pending,
    Invited,
    Accepted,
    Declined,
    NotSelected,
    Cancelled,
}

impl DecisionStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [DecisionStatus; 6] = [
        DecisionStatus::Pending,
        DecisionStatus::Invited,
        DecisionStatus::Accepted,
        DecisionStatus::Declined,
        DecisionStatus::NotSelected,
        DecisionStatus::Cancelled,
    ];

    /// The stored string form, matching the `decisions.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "pending",
            DecisionStatus::Invited => "invited",
            DecisionStatus::Accepted => "accepted",
            DecisionStatus::Declined => "declined",
            DecisionStatus::NotSelected => "not_selected",
            DecisionStatus::Cancelled => "cancelled",
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DecisionStatus::Accepted
                | DecisionStatus::Declined
                | DecisionStatus::NotSelected
                | DecisionStatus::Cancelled
        )
    }

    /// The transition table.
    ///
    /// - `pending -> invited | not_selected | cancelled`
    /// - `invited -> accepted | declined | cancelled`
    /// - terminal states admit nothing.
    pub fn can_transition_to(&self, next: DecisionStatus) -> bool {
        use DecisionStatus::*;
        matches!(
            (self, next),
            (Pending, Invited)
                | (Pending, NotSelected)
                | (Pending, Cancelled)
                | (Invited, Accepted)
                | (Invited, Declined)
                | (Invited, Cancelled)
        )
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DecisionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DecisionStatus::Pending),
            "invited" => Ok(DecisionStatus::Invited),
            "accepted" => Ok(DecisionStatus::Accepted),
            "declined" => Ok(DecisionStatus::Declined),
            "not_selected" => Ok(DecisionStatus::NotSelected),
            "cancelled" => Ok(DecisionStatus::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Invalid decision status '{other}'"
            ))),
        }
    }
}

/// An invited entrant's answer to their invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondChoice {
    Accept,
    Decline,
}

impl RespondChoice {
    /// The decision status this choice transitions to.
    pub fn resulting_status(&self) -> DecisionStatus {
        match self {
            RespondChoice::Accept => DecisionStatus::Accepted,
            RespondChoice::Decline => DecisionStatus::Declined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pending_transitions() {
        let p = DecisionStatus::Pending;
        assert!(p.can_transition_to(DecisionStatus::Invited));
        assert!(p.can_transition_to(DecisionStatus::NotSelected));
        assert!(p.can_transition_to(DecisionStatus::Cancelled));
        assert!(!p.can_transition_to(DecisionStatus::Accepted));
        assert!(!p.can_transition_to(DecisionStatus::Declined));
        assert!(!p.can_transition_to(DecisionStatus::Pending));
    }

    #[test]
    fn test_invited_transitions() {
        let i = DecisionStatus::Invited;
        assert!(i.can_transition_to(DecisionStatus::Accepted));
        assert!(i.can_transition_to(DecisionStatus::Declined));
        assert!(i.can_transition_to(DecisionStatus::Cancelled));
        assert!(!i.can_transition_to(DecisionStatus::Pending));
        assert!(!i.can_transition_to(DecisionStatus::NotSelected));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [
            DecisionStatus::Accepted,
            DecisionStatus::Declined,
            DecisionStatus::NotSelected,
            DecisionStatus::Cancelled,
        ] {
            assert!(terminal.is_terminal());
            for next in DecisionStatus::ALL {
                assert!(
                    !terminal.can_transition_to(next),
                    "{terminal} must not transition to {next}"
                );
            }
        }
    }

    #[test]
    fn test_no_backward_transitions() {
        // Invited can never return to pending, and nothing re-enters
        // a state it already passed through.
        for status in DecisionStatus::ALL {
            assert!(!status.can_transition_to(DecisionStatus::Pending));
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_round_trip_str() {
        for status in DecisionStatus::ALL {
            let parsed = DecisionStatus::from_str(status.as_str()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(DecisionStatus::from_str("winner").is_err());
        assert!(DecisionStatus::from_str("").is_err());
        assert!(DecisionStatus::from_str("PENDING").is_err());
    }

    #[test]
    fn test_respond_choice_statuses() {
        assert_eq!(
            RespondChoice::Accept.resulting_status(),
            DecisionStatus::Accepted
        );
        assert_eq!(
            RespondChoice::Decline.resulting_status(),
            DecisionStatus::Declined
        );
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DecisionStatus::NotSelected).unwrap();
        assert_eq!(json, "\"not_selected\"");
        let back: DecisionStatus = serde_json::from_str("\"invited\"").unwrap();
        assert_eq!(back, DecisionStatus::Invited);
    }
}
