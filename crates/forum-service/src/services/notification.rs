//! Notification service
//!
//! Read side of the notifications written by the fan-out worker.

use forum_core::traits::PageQuery;
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{NotificationResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The user's own notifications, newest first
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        user_id: Uuid,
        query: PageQuery,
    ) -> ServiceResult<PaginatedResponse<NotificationResponse>> {
        let notifications = self
            .ctx
            .notification_repo()
            .find_by_recipient(user_id, query)
            .await?;
        let next_before = notifications.last().map(|n| n.created_at);

        let data = notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect();

        Ok(PaginatedResponse::new(data, next_before, query.limit))
    }

    /// Mark one of the user's notifications as read.
    /// Someone else's notification is reported as missing.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> ServiceResult<()> {
        let notification = self
            .ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.is_for(user_id))
            .ok_or(DomainError::NotificationNotFound(notification_id))?;

        if notification.is_read {
            return Ok(());
        }

        self.ctx
            .notification_repo()
            .mark_read(notification_id)
            .await?;

        info!(notification_id = %notification_id, "Notification marked read");
        Ok(())
    }
}
