//! Push-gateway delivery with exponential-backoff retry.
//!
//! [`WebhookSink`] POSTs one JSON notification per entrant to an
//! external push gateway. Failed attempts are retried up to three times
//! with exponential backoff (1 s, 2 s, 4 s).

use std::time::Duration;

use drawlist_core::types::EntrantId;

use super::{DeliveryError, NotificationSink};

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers notifications to an external push gateway.
pub struct WebhookSink {
    client: reqwest::Client,
    gateway_url: String,
}

impl WebhookSink {
    /// Create a sink with a pre-configured HTTP client.
    pub fn new(gateway_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            gateway_url: gateway_url.into(),
        })
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, payload: &serde_json::Value) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.gateway_url)
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl NotificationSink for WebhookSink {
    /// Deliver one notification with retry.
    ///
    /// Retries up to 3 times with exponential backoff before giving up.
    /// Returns `Ok(())` on the first successful attempt.
    async fn send(
        &self,
        entrant_id: EntrantId,
        title: &str,
        body: &str,
    ) -> Result<(), DeliveryError> {
        let payload = serde_json::json!({
            "entrant_id": entrant_id,
            "title": title,
            "body": body,
        });

        let mut last_err: Option<DeliveryError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_send(&payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        %entrant_id,
                        error = %e,
                        "Push delivery attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.try_send(&payload).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(%entrant_id, error = %e, "Push delivery failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }
}
