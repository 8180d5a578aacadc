//! Comment service
//!
//! Handles comments and replies on a post: creation, threaded listing,
//! editing, deletion and reactions.

use std::collections::HashMap;

use chrono::Utc;
use forum_core::entities::{Comment, UserProfile};
use forum_core::events::{
    CommentCreatedEvent, CommentDeletedEvent, CommentUpdatedEvent, DomainEvent, ReactionTarget,
    ReactionToggledEvent,
};
use forum_core::rules::ensure_content;
use forum_core::threads::assemble;
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CommentResponse, CommentWithAuthor, CreateCommentRequest, ReactionsResponse, ThreadResponse,
    UpdateCommentRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::load_authors;
use super::permission::PermissionService;

/// Characters of comment text quoted in notifications
const PREVIEW_LENGTH: usize = 80;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment, or a reply when `parent_id` is set
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let content = ensure_content(&request.content)?;

        let author = PermissionService::new(self.ctx)
            .require_profile(author_id)
            .await?;

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        // A parent must exist on the same post
        let parent = match request.parent_id {
            Some(parent_id) => match self.ctx.comment_repo().find_by_id(parent_id).await? {
                Some(parent) if parent.post_id == post_id => Some(parent),
                _ => return Err(DomainError::ParentNotInPost(parent_id).into()),
            },
            None => None,
        };

        let comment_id = Uuid::new_v4();
        let comment = match &parent {
            Some(parent) => Comment::new_reply(comment_id, post_id, author_id, content, parent.id),
            None => Comment::new(comment_id, post_id, author_id, content),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment_id,
            post_id = %post_id,
            is_reply = comment.is_reply(),
            "Comment created"
        );

        self.ctx
            .notifier()
            .dispatch(DomainEvent::CommentCreated(CommentCreatedEvent {
                comment_id,
                post_id,
                author_id,
                author_name: author.display_name().to_string(),
                parent_id: comment.parent_id,
                parent_author_id: parent.as_ref().map(|p| p.author_id),
                preview: comment.preview(PREVIEW_LENGTH).to_string(),
                timestamp: comment.created_at,
            }));

        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author: Some(author),
            viewer_id: author_id,
        }))
    }

    /// All comments of a post grouped into threads
    #[instrument(skip(self))]
    pub async fn list_threads(
        &self,
        post_id: Uuid,
        viewer_id: Uuid,
    ) -> ServiceResult<Vec<ThreadResponse>> {
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        let authors = load_authors(self.ctx, comments.iter().map(|c| c.author_id)).await?;

        let threads = assemble(comments)
            .into_iter()
            .map(|thread| ThreadResponse {
                parent: to_response(thread.parent, &authors, viewer_id),
                replies: thread
                    .replies
                    .into_iter()
                    .map(|reply| to_response(reply, &authors, viewer_id))
                    .collect(),
            })
            .collect();

        Ok(threads)
    }

    /// Edit a comment's content (author only)
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.load_comment(post_id, comment_id).await?;
        PermissionService::new(self.ctx).require_author(comment.author_id, actor_id)?;

        let content = ensure_content(&request.content)?;
        comment.edit(content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, post_id = %post_id, "Comment updated");

        self.ctx
            .notifier()
            .dispatch(DomainEvent::CommentUpdated(CommentUpdatedEvent {
                comment_id,
                post_id,
                timestamp: comment.updated_at,
            }));

        let author = self.ctx.profile_repo().find_by_id(comment.author_id).await?;
        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author,
            viewer_id: actor_id,
        }))
    }

    /// Delete a comment and its stored replies (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
    ) -> ServiceResult<()> {
        let permissions = PermissionService::new(self.ctx);
        let actor = permissions.require_profile(actor_id).await?;
        let comment = self.load_comment(post_id, comment_id).await?;
        permissions.require_author_or_admin(comment.author_id, &actor)?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, post_id = %post_id, deleted_by = %actor_id, "Comment deleted");

        self.ctx
            .notifier()
            .dispatch(DomainEvent::CommentDeleted(CommentDeletedEvent {
                comment_id,
                post_id,
                deleted_by: actor_id,
                timestamp: Utc::now(),
            }));

        Ok(())
    }

    /// Toggle the actor's like or dislike on a comment.
    ///
    /// Read, toggle and write are not guarded against concurrent toggles;
    /// the last write wins.
    #[instrument(skip(self))]
    pub async fn toggle_comment_reaction(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
        is_like: bool,
    ) -> ServiceResult<ReactionsResponse> {
        let actor = PermissionService::new(self.ctx)
            .require_profile(actor_id)
            .await?;
        let comment = self.load_comment(post_id, comment_id).await?;

        let key = actor_id.to_string();
        let previous = comment.reactions.status_for(&key);
        let updated = comment
            .reactions
            .toggle(&key, is_like, actor.display_name());
        let current = updated.status_for(&key);

        self.ctx
            .comment_repo()
            .update_reactions(comment_id, &updated.encode())
            .await?;

        info!(
            comment_id = %comment_id,
            actor_id = %actor_id,
            previous = ?previous,
            current = ?current,
            "Comment reaction toggled"
        );

        self.ctx
            .notifier()
            .dispatch(DomainEvent::ReactionToggled(ReactionToggledEvent {
                target: ReactionTarget::Comment {
                    post_id,
                    comment_id,
                },
                target_author_id: comment.author_id,
                actor_id,
                actor_name: actor.display_name().to_string(),
                previous,
                current,
                timestamp: Utc::now(),
            }));

        Ok(ReactionsResponse::for_viewer(&updated, actor_id))
    }

    /// Load a comment, treating one that lives on another post as missing
    async fn load_comment(&self, post_id: Uuid, comment_id: Uuid) -> ServiceResult<Comment> {
        match self.ctx.comment_repo().find_by_id(comment_id).await? {
            Some(comment) if comment.post_id == post_id => Ok(comment),
            _ => Err(DomainError::CommentNotFound(comment_id).into()),
        }
    }
}

fn to_response(
    comment: Comment,
    authors: &HashMap<Uuid, UserProfile>,
    viewer_id: Uuid,
) -> CommentResponse {
    let author = authors.get(&comment.author_id).cloned();
    CommentResponse::from(CommentWithAuthor {
        comment,
        author,
        viewer_id,
    })
}
