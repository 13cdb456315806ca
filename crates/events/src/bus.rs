//! In-process intent bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`IntentBus`] is the hand-off point between the HTTP handlers (which
//! publish after their transaction commits) and the
//! [`NotificationDispatcher`](crate::NotificationDispatcher). It is
//! shared via `Arc<IntentBus>` across the application.

use tokio::sync::broadcast;

use crate::intent::NotificationIntent;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for [`NotificationIntent`]s.
pub struct IntentBus {
    sender: broadcast::Sender<NotificationIntent>,
}

impl IntentBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed intents are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an intent to all current subscribers.
    ///
    /// If there are no active subscribers the intent is silently
    /// dropped; the triggering state change has already committed and
    /// is never affected.
    pub fn publish(&self, intent: NotificationIntent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(intent);
    }

    /// Subscribe to all intents published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationIntent> {
        self.sender.subscribe()
    }
}

impl Default for IntentBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = IntentBus::default();
        let mut rx = bus.subscribe();

        bus.publish(NotificationIntent::invited(42, "Test Event"));

        let received = rx.recv().await.expect("should receive the intent");
        assert_eq!(received.event_id, 42);
        assert_eq!(received.kind.as_str(), "invited");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_intent() {
        let bus = IntentBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(NotificationIntent::custom(1, "Hello", "World"));

        assert_eq!(rx1.recv().await.unwrap().title, "Hello");
        assert_eq!(rx2.recv().await.unwrap().title, "Hello");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = IntentBus::default();
        bus.publish(NotificationIntent::not_selected(1, "Orphan"));
    }
}
