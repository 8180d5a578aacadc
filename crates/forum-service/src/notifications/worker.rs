//! Background worker that drains the notification queue

use std::sync::Arc;
use std::time::Duration;

use forum_common::NotifyConfig;
use forum_core::entities::Notification;
use forum_core::events::DomainEvent;
use forum_core::traits::{NotificationRepository, ProfileRepository};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::audience::{plan_for, Audience, NotificationPlan};
use super::dispatcher::NotificationQueue;

/// Turns queued domain events into stored notifications, in paced chunks
pub struct NotificationWorker {
    queue: NotificationQueue,
    profiles: Arc<dyn ProfileRepository>,
    notifications: Arc<dyn NotificationRepository>,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl NotificationWorker {
    pub fn new(
        queue: NotificationQueue,
        profiles: Arc<dyn ProfileRepository>,
        notifications: Arc<dyn NotificationRepository>,
        config: &NotifyConfig,
    ) -> Self {
        Self {
            queue,
            profiles,
            notifications,
            chunk_size: config.chunk_size.max(1),
            chunk_delay: config.chunk_delay(),
        }
    }

    /// Run on the tokio runtime until every dispatcher is dropped
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Process events until the queue closes
    pub async fn run(mut self) {
        info!(
            chunk_size = self.chunk_size,
            chunk_delay_ms = self.chunk_delay.as_millis() as u64,
            "Notification worker started"
        );

        while let Some(event) = self.queue.recv().await {
            self.handle(&event).await;
        }

        info!("Notification worker stopped");
    }

    #[instrument(skip_all, fields(event_type = event.event_type()))]
    async fn handle(&self, event: &DomainEvent) {
        let Some(plan) = plan_for(event) else {
            debug!("No notification for event");
            return;
        };

        let recipients = match plan.audience {
            Audience::User(user_id) => vec![user_id],
            Audience::AllExcept(actor_id) => {
                match self.profiles.list_ids_except(actor_id).await {
                    Ok(ids) => ids,
                    Err(e) => {
                        warn!(error = %e, "Could not resolve notification audience");
                        return;
                    }
                }
            }
        };

        self.deliver(&plan, &recipients).await;
    }

    async fn deliver(&self, plan: &NotificationPlan, recipients: &[Uuid]) {
        let mut delivered = 0u64;

        for (index, chunk) in recipients.chunks(self.chunk_size).enumerate() {
            if index > 0 && !self.chunk_delay.is_zero() {
                tokio::time::sleep(self.chunk_delay).await;
            }

            let batch: Vec<Notification> = chunk
                .iter()
                .map(|recipient| {
                    Notification::new(
                        *recipient,
                        plan.actor_id,
                        plan.kind,
                        plan.message.clone(),
                        Some(plan.post_id),
                    )
                })
                .collect();

            match self.notifications.create_many(&batch).await {
                Ok(written) => delivered += written,
                Err(e) => warn!(chunk = index, error = %e, "Failed to store notification chunk"),
            }
        }

        info!(
            kind = %plan.kind,
            recipients = recipients.len(),
            delivered,
            "Notifications delivered"
        );
    }
}
