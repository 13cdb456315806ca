//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod decision;
pub mod entry;
pub mod event;
pub mod notification;

pub use decision::Decision;
pub use entry::{JoinRequest, WaitlistEntry};
pub use event::{CreateEvent, Event};
pub use notification::NotificationLogEntry;
