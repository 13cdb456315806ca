//! Notification intents: who should hear about what.
//!
//! An intent names its audience by *rule* (a [`TargetSelector`]), not by
//! a frozen list of ids. The dispatcher expands the rule when it handles
//! the intent, so late state changes (a leave racing a draw broadcast)
//! resolve against current state.

use chrono::{DateTime, Utc};
use drawlist_core::decision::DecisionStatus;
use drawlist_core::types::{DbId, EntrantId};
use serde::{Deserialize, Serialize};

/// Who an intent addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum TargetSelector {
    /// One specific entrant.
    Entrant { entrant_id: EntrantId },
    /// Everyone whose decision currently holds the given status.
    WithStatus { status: DecisionStatus },
    /// Everyone currently on the waitlist.
    AllWaitlisted,
}

/// What kind of news an intent carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Invited,
    NotSelected,
    Accepted,
    /// Organizer-authored broadcast.
    Custom,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Invited => "invited",
            IntentKind::NotSelected => "not_selected",
            IntentKind::Accepted => "accepted",
            IntentKind::Custom => "custom",
        }
    }
}

/// A notification request published on the [`IntentBus`](crate::IntentBus).
///
/// Constructed via the standard-message constructors ([`invited`],
/// [`not_selected`], [`accepted`]) or [`custom`] for organizer
/// broadcasts. Intents are published strictly after the triggering
/// transaction commits.
///
/// [`invited`]: NotificationIntent::invited
/// [`not_selected`]: NotificationIntent::not_selected
/// [`accepted`]: NotificationIntent::accepted
/// [`custom`]: NotificationIntent::custom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationIntent {
    pub event_id: DbId,
    pub kind: IntentKind,
    pub selector: TargetSelector,
    pub title: String,
    pub body: String,
    /// When the intent was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl NotificationIntent {
    fn new(
        event_id: DbId,
        kind: IntentKind,
        selector: TargetSelector,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            kind,
            selector,
            title: title.into(),
            body: body.into(),
            timestamp: Utc::now(),
        }
    }

    /// The post-draw message for winners.
    pub fn invited(event_id: DbId, event_name: &str) -> Self {
        Self::new(
            event_id,
            IntentKind::Invited,
            TargetSelector::WithStatus {
                status: DecisionStatus::Invited,
            },
            "You're in the draw!",
            format!("You won a spot for {event_name}. Accept or decline your invitation."),
        )
    }

    /// The post-draw message for everyone who missed out.
    pub fn not_selected(event_id: DbId, event_name: &str) -> Self {
        Self::new(
            event_id,
            IntentKind::NotSelected,
            TargetSelector::WithStatus {
                status: DecisionStatus::NotSelected,
            },
            "Lottery results",
            format!("You were not selected for {event_name} this time."),
        )
    }

    /// The confirmation sent to an entrant who accepted.
    pub fn accepted(event_id: DbId, event_name: &str, entrant_id: EntrantId) -> Self {
        Self::new(
            event_id,
            IntentKind::Accepted,
            TargetSelector::Entrant { entrant_id },
            "Spot confirmed",
            format!("Your spot for {event_name} is confirmed. See you there."),
        )
    }

    /// An organizer-authored broadcast to the whole waitlist.
    pub fn custom(
        event_id: DbId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(
            event_id,
            IntentKind::Custom,
            TargetSelector::AllWaitlisted,
            title,
            body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invited_targets_current_winners() {
        let intent = NotificationIntent::invited(7, "Spring Run");
        assert_eq!(intent.kind, IntentKind::Invited);
        assert_eq!(
            intent.selector,
            TargetSelector::WithStatus {
                status: DecisionStatus::Invited
            }
        );
        assert!(intent.body.contains("Spring Run"));
    }

    #[test]
    fn accepted_targets_single_entrant() {
        let entrant = uuid::Uuid::new_v4();
        let intent = NotificationIntent::accepted(7, "Spring Run", entrant);
        assert_eq!(
            intent.selector,
            TargetSelector::Entrant {
                entrant_id: entrant
            }
        );
    }

    #[test]
    fn selector_serializes_with_discriminant() {
        let json = serde_json::to_value(TargetSelector::AllWaitlisted).unwrap();
        assert_eq!(json["target"], "all_waitlisted");

        let json = serde_json::to_value(TargetSelector::WithStatus {
            status: DecisionStatus::NotSelected,
        })
        .unwrap();
        assert_eq!(json["target"], "with_status");
        assert_eq!(json["status"], "not_selected");
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            IntentKind::Invited,
            IntentKind::NotSelected,
            IntentKind::Accepted,
            IntentKind::Custom,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }
}
