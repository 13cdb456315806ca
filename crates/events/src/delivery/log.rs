//! Tracing-only sink for deployments without a push gateway.

use drawlist_core::types::EntrantId;

use super::{DeliveryError, NotificationSink};

/// Logs each notification instead of pushing it anywhere.
pub struct LogSink;

#[async_trait::async_trait]
impl NotificationSink for LogSink {
    async fn send(
        &self,
        entrant_id: EntrantId,
        title: &str,
        body: &str,
    ) -> Result<(), DeliveryError> {
        tracing::info!(%entrant_id, title, body, "Notification (log sink)");
        Ok(())
    }
}
