//! Sending side of the notification queue

use forum_core::events::DomainEvent;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Cheap, cloneable handle used by services to enqueue events
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    tx: mpsc::UnboundedSender<DomainEvent>,
}

/// Receiving side, consumed by [`super::NotificationWorker`]
#[derive(Debug)]
pub struct NotificationQueue {
    rx: mpsc::UnboundedReceiver<DomainEvent>,
}

impl NotificationDispatcher {
    /// Create a connected dispatcher and queue
    pub fn channel() -> (Self, NotificationQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, NotificationQueue { rx })
    }

    /// Enqueue an event. Never blocks and never fails the caller.
    pub fn dispatch(&self, event: DomainEvent) {
        let event_type = event.event_type();
        match self.tx.send(event) {
            Ok(()) => debug!(event_type, "Queued notification event"),
            Err(_) => warn!(event_type, "Notification queue closed, dropping event"),
        }
    }
}

impl NotificationQueue {
    /// Wait for the next event; `None` once every dispatcher is dropped
    pub async fn recv(&mut self) -> Option<DomainEvent> {
        self.rx.recv().await
    }
}
