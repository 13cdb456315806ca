//! Delivery sinks: the last hop from dispatcher to entrant.
//!
//! The dispatcher is sink-agnostic; production uses the webhook push
//! gateway, deployments without one (and tests) use the log sink.

use drawlist_core::types::EntrantId;

pub mod log;
pub mod webhook;

/// Error type for delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Push gateway returned HTTP {0}")]
    HttpStatus(u16),
}

/// A channel that can push one notification to one entrant.
///
/// Delivery is best-effort; an `Err` is recorded in the audit log and
/// never propagates into lottery state.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(
        &self,
        entrant_id: EntrantId,
        title: &str,
        body: &str,
    ) -> Result<(), DeliveryError>;
}
