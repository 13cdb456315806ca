//! Intent-to-notification fan-out engine.
//!
//! [`NotificationDispatcher`] subscribes to the intent bus, expands each
//! intent's target selector to concrete entrant ids against *current*
//! decision state, and pushes one notification per entrant through the
//! configured sink. Every attempt is audited in `notification_log`;
//! a failed delivery to one entrant never blocks the rest and never
//! touches lottery state.

use std::sync::Arc;

use drawlist_core::types::EntrantId;
use drawlist_db::repositories::{DecisionRepo, EntryRepo, NotificationLogRepo};
use drawlist_db::DbPool;
use tokio::sync::broadcast;

use crate::delivery::NotificationSink;
use crate::intent::{NotificationIntent, TargetSelector};

/// Background task that fans intents out to entrants.
pub struct NotificationDispatcher {
    pool: DbPool,
    sink: Arc<dyn NotificationSink>,
}

impl NotificationDispatcher {
    pub fn new(pool: DbPool, sink: Arc<dyn NotificationSink>) -> Self {
        Self { pool, sink }
    }

    /// Run the main dispatch loop.
    ///
    /// Subscribes to the intent bus via `receiver` and processes each
    /// intent. The loop exits when the channel is closed (i.e. the
    /// [`IntentBus`](crate::IntentBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<NotificationIntent>) {
        loop {
            match receiver.recv().await {
                Ok(intent) => {
                    if let Err(e) = self.dispatch(&intent).await {
                        tracing::error!(
                            error = %e,
                            event_id = intent.event_id,
                            kind = intent.kind.as_str(),
                            "Failed to dispatch intent"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification dispatcher lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Intent bus closed, dispatcher shutting down");
                    break;
                }
            }
        }
    }

    /// Fan one intent out to all of its current targets.
    pub async fn dispatch(&self, intent: &NotificationIntent) -> Result<(), sqlx::Error> {
        let targets = self.expand_targets(intent).await?;

        for entrant_id in targets {
            let delivered = match self
                .sink
                .send(entrant_id, &intent.title, &intent.body)
                .await
            {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        %entrant_id,
                        event_id = intent.event_id,
                        error = %e,
                        "Delivery failed for entrant"
                    );
                    false
                }
            };

            // The audit row is written either way; a log write failure
            // is itself only logged.
            if let Err(e) = NotificationLogRepo::record(
                &self.pool,
                intent.event_id,
                entrant_id,
                intent.kind.as_str(),
                &intent.title,
                &intent.body,
                delivered,
            )
            .await
            {
                tracing::error!(
                    %entrant_id,
                    event_id = intent.event_id,
                    error = %e,
                    "Failed to write notification audit row"
                );
            }
        }

        Ok(())
    }

    /// Resolve the selector to entrant ids against current state.
    async fn expand_targets(
        &self,
        intent: &NotificationIntent,
    ) -> Result<Vec<EntrantId>, sqlx::Error> {
        match &intent.selector {
            TargetSelector::Entrant { entrant_id } => Ok(vec![*entrant_id]),
            TargetSelector::WithStatus { status } => {
                DecisionRepo::entrants_with_status(&self.pool, intent.event_id, *status).await
            }
            TargetSelector::AllWaitlisted => {
                EntryRepo::live_entrants(&self.pool, intent.event_id).await
            }
        }
    }
}
