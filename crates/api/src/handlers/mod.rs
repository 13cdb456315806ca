//! HTTP handlers, grouped by resource.

pub mod events;
pub mod lottery;
pub mod notifications;
pub mod registration;
pub mod responses;
