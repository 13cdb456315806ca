//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. The state-changing
//! repositories ([`RegistrationRepo`], [`DrawRepo`], [`RespondRepo`])
//! run each operation in a single transaction and are the sole writers
//! for their transition set.

use drawlist_core::decision::DecisionStatus;
use drawlist_core::CoreError;

pub mod decision_repo;
pub mod draw_repo;
pub mod entry_repo;
pub mod event_repo;
pub mod notification_log_repo;
pub mod registration_repo;
pub mod respond_repo;

pub use decision_repo::DecisionRepo;
pub use draw_repo::DrawRepo;
pub use entry_repo::EntryRepo;
pub use event_repo::EventRepo;
pub use notification_log_repo::NotificationLogRepo;
pub use registration_repo::RegistrationRepo;
pub use respond_repo::RespondRepo;

/// Parse a stored status string, mapping schema drift to a decode error.
pub(crate) fn parse_status(s: &str) -> Result<DecisionStatus, sqlx::Error> {
    s.parse()
        .map_err(|e: CoreError| sqlx::Error::Decode(Box::new(e)))
}
