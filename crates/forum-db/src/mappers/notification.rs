//! Notification model → entity mapper

use forum_core::entities::{Notification, NotificationKind};
use forum_core::error::DomainError;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<NotificationKind>()
            .map_err(DomainError::DatabaseError)?;

        Ok(Notification {
            id: model.id,
            recipient_id: model.recipient_id,
            actor_id: model.actor_id,
            kind,
            message: model.message,
            post_id: model.post_id,
            is_read: model.is_read,
            created_at: model.created_at,
        })
    }
}
