//! Reaction handlers
//!
//! Like/dislike toggles on posts and comments.

use axum::{extract::State, Json};
use forum_service::{CommentService, PostService, ReactionsResponse, ToggleReactionRequest};
use uuid::Uuid;

use crate::extractors::{AuthUser, IdPath, PostCommentPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle reaction on a post
///
/// POST /posts/{post_id}/reactions
pub async fn toggle_post_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<Uuid>,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ReactionsResponse>> {
    let service = PostService::new(state.service_context());
    let response = service
        .toggle_post_reaction(post_id, auth.user_id, request.is_like)
        .await?;
    Ok(Json(response))
}

/// Toggle reaction on a comment
///
/// POST /posts/{post_id}/comments/{comment_id}/reactions
pub async fn toggle_comment_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostCommentPath>,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ReactionsResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .toggle_comment_reaction(path.post_id, path.comment_id, auth.user_id, request.is_like)
        .await?;
    Ok(Json(response))
}
