//! Comment handlers
//!
//! Endpoints for comments and replies under a post.

use axum::{extract::State, Json};
use forum_service::{
    CommentResponse, CommentService, CreateCommentRequest, ThreadResponse, UpdateCommentRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, IdPath, PostCommentPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a post's comments as threads
///
/// GET /posts/{post_id}/comments
pub async fn list_threads(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<Uuid>,
) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let service = CommentService::new(state.service_context());
    let threads = service.list_threads(post_id, auth.user_id).await?;
    Ok(Json(threads))
}

/// Create comment or reply
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(post_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Edit comment
///
/// PATCH /posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostCommentPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(path.post_id, path.comment_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete comment
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostCommentPath>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete_comment(path.post_id, path.comment_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
