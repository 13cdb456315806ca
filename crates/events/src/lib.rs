//! Drawlist notification infrastructure.
//!
//! This crate carries lottery outcomes from the store layer to entrants:
//!
//! - [`NotificationIntent`] -- the "who should hear what" envelope,
//!   published by HTTP handlers after a state change commits.
//! - [`IntentBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`NotificationDispatcher`] -- background task that expands each
//!   intent to concrete entrants and pushes through a delivery sink,
//!   auditing every attempt in `notification_log`.
//! - [`delivery`] -- the sink trait plus webhook and log implementations.

pub mod bus;
pub mod delivery;
pub mod dispatcher;
pub mod intent;

pub use bus::IntentBus;
pub use delivery::log::LogSink;
pub use delivery::webhook::WebhookSink;
pub use delivery::NotificationSink;
pub use dispatcher::NotificationDispatcher;
pub use intent::{IntentKind, NotificationIntent, TargetSelector};
