//! Notification handlers

use axum::{extract::State, Json};
use forum_service::{NotificationResponse, NotificationService, PaginatedResponse};
use uuid::Uuid;

use crate::extractors::{AuthUser, IdPath, Pagination};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the caller's notifications
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service
        .list_notifications(auth.user_id, pagination.into())
        .await?;
    Ok(Json(notifications))
}

/// Mark one notification as read
///
/// POST /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(notification_id): IdPath<Uuid>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.user_id, notification_id).await?;
    Ok(NoContent)
}
