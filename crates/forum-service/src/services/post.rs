//! Post service
//!
//! Handles post creation, editing, deletion, listing and reactions.

use chrono::Utc;
use forum_core::entities::Post;
use forum_core::events::{
    DomainEvent, PostCreatedEvent, PostDeletedEvent, PostUpdatedEvent, ReactionTarget,
    ReactionToggledEvent,
};
use forum_core::rules::{ensure_content, ensure_title};
use forum_core::traits::PageQuery;
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreatePostRequest, PaginatedResponse, PostResponse, PostWithAuthor, ReactionsResponse,
    UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookup::load_authors;
use super::permission::PermissionService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post and notify every other member
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let title = ensure_title(&request.title)?;
        let content = ensure_content(&request.content)?;

        let author = PermissionService::new(self.ctx)
            .require_profile(author_id)
            .await?;

        let post = Post::new(Uuid::new_v4(), author_id, title, content);
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        self.ctx
            .notifier()
            .dispatch(DomainEvent::PostCreated(PostCreatedEvent {
                post_id: post.id,
                author_id,
                author_name: author.display_name().to_string(),
                title: post.title.clone(),
                timestamp: post.created_at,
            }));

        Ok(PostResponse::from(PostWithAuthor {
            post,
            author: Some(author),
            viewer_id: author_id,
        }))
    }

    /// Get a post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid, viewer_id: Uuid) -> ServiceResult<PostResponse> {
        let post = self.load_post(post_id).await?;
        let author = self.ctx.profile_repo().find_by_id(post.author_id).await?;

        Ok(PostResponse::from(PostWithAuthor {
            post,
            author,
            viewer_id,
        }))
    }

    /// List posts newest first
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        viewer_id: Uuid,
        query: PageQuery,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let posts = self.ctx.post_repo().list(query).await?;
        let authors = load_authors(self.ctx, posts.iter().map(|p| p.author_id)).await?;
        let next_before = posts.last().map(|p| p.created_at);

        let data = posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned();
                PostResponse::from(PostWithAuthor {
                    post,
                    author,
                    viewer_id,
                })
            })
            .collect();

        Ok(PaginatedResponse::new(data, next_before, query.limit))
    }

    /// Edit a post's title and/or content (author only)
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Uuid,
        actor_id: Uuid,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        if request.is_empty() {
            return Err(ServiceError::validation(
                "At least one of title or content is required",
            ));
        }

        let mut post = self.load_post(post_id).await?;
        PermissionService::new(self.ctx).require_author(post.author_id, actor_id)?;

        let title = request.title.as_deref().map(ensure_title).transpose()?;
        let content = request.content.as_deref().map(ensure_content).transpose()?;

        post.edit(title, content);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Post updated");

        self.ctx
            .notifier()
            .dispatch(DomainEvent::PostUpdated(PostUpdatedEvent {
                post_id,
                timestamp: post.updated_at,
            }));

        let author = self.ctx.profile_repo().find_by_id(post.author_id).await?;
        Ok(PostResponse::from(PostWithAuthor {
            post,
            author,
            viewer_id: actor_id,
        }))
    }

    /// Delete a post and its comments (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Uuid, actor_id: Uuid) -> ServiceResult<()> {
        let permissions = PermissionService::new(self.ctx);
        let actor = permissions.require_profile(actor_id).await?;
        let post = self.load_post(post_id).await?;
        permissions.require_author_or_admin(post.author_id, &actor)?;

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, deleted_by = %actor_id, "Post deleted");

        self.ctx
            .notifier()
            .dispatch(DomainEvent::PostDeleted(PostDeletedEvent {
                post_id,
                deleted_by: actor_id,
                timestamp: Utc::now(),
            }));

        Ok(())
    }

    /// Toggle the actor's like or dislike on a post.
    ///
    /// The whole reaction list is rewritten; if that write fails nothing
    /// changes and no notification is sent.
    #[instrument(skip(self))]
    pub async fn toggle_post_reaction(
        &self,
        post_id: Uuid,
        actor_id: Uuid,
        is_like: bool,
    ) -> ServiceResult<ReactionsResponse> {
        let actor = PermissionService::new(self.ctx)
            .require_profile(actor_id)
            .await?;
        let post = self.load_post(post_id).await?;

        let key = actor_id.to_string();
        let previous = post.reactions.status_for(&key);
        let updated = post
            .reactions
            .toggle(&key, is_like, actor.display_name());
        let current = updated.status_for(&key);

        self.ctx
            .post_repo()
            .update_reactions(post_id, &updated.encode())
            .await?;

        info!(
            post_id = %post_id,
            actor_id = %actor_id,
            previous = ?previous,
            current = ?current,
            "Post reaction toggled"
        );

        self.ctx
            .notifier()
            .dispatch(DomainEvent::ReactionToggled(ReactionToggledEvent {
                target: ReactionTarget::Post { post_id },
                target_author_id: post.author_id,
                actor_id,
                actor_name: actor.display_name().to_string(),
                previous,
                current,
                timestamp: Utc::now(),
            }));

        Ok(ReactionsResponse::for_viewer(&updated, actor_id))
    }

    async fn load_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;
        Ok(post)
    }
}
