//! Drawlist core domain logic.
//!
//! Pure rules for the waitlist lottery: the decision state machine,
//! uniform winner selection, registration preconditions, and the typed
//! outcomes of the four state-changing operations (join, leave, draw,
//! respond). No IO lives here -- the `drawlist-db` crate executes these
//! rules inside store transactions.

pub mod decision;
pub mod error;
pub mod lottery;
pub mod registration;
pub mod types;

pub use decision::{DecisionStatus, RespondChoice};
pub use error::CoreError;
pub use registration::{DrawOutcome, JoinOutcome, LeaveOutcome, RespondOutcome};
