//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use forum_core::entities::Notification;
use forum_core::traits::{NotificationRepository, PageQuery, RepoResult};

use crate::models::NotificationModel;

use super::error::{map_db_error, notification_not_found};

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notifications), fields(count = notifications.len()))]
    async fn create_many(&self, notifications: &[Notification]) -> RepoResult<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut written = 0;

        for notification in notifications {
            let result = sqlx::query(
                r"
                INSERT INTO notifications (id, recipient_id, actor_id, kind, message, post_id,
                                           is_read, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(notification.id)
            .bind(notification.recipient_id)
            .bind(notification.actor_id)
            .bind(notification.kind.as_str())
            .bind(&notification.message)
            .bind(notification.post_id)
            .bind(notification.is_read)
            .bind(notification.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            written += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(written)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Notification>> {
        let result = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, recipient_id, actor_id, kind, message, post_id, is_read, created_at
            FROM notifications
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Notification::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        query: PageQuery,
    ) -> RepoResult<Vec<Notification>> {
        let results = match query.before {
            Some(before) => {
                sqlx::query_as::<_, NotificationModel>(
                    r"
                    SELECT id, recipient_id, actor_id, kind, message, post_id, is_read, created_at
                    FROM notifications
                    WHERE recipient_id = $1 AND created_at < $2
                    ORDER BY created_at DESC
                    LIMIT $3
                    ",
                )
                .bind(recipient_id)
                .bind(before)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, NotificationModel>(
                    r"
                    SELECT id, recipient_id, actor_id, kind, message, post_id, is_read, created_at
                    FROM notifications
                    WHERE recipient_id = $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    ",
                )
                .bind(recipient_id)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
        }

        Ok(())
    }
}
