//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Posts and comments carry only an author id, so the mappers take the
//! resolved profile (if any) and the viewing user alongside the entity.

use forum_core::entities::{Comment, Notification, Post, UserProfile};
use forum_core::value_objects::ReactionList;
use uuid::Uuid;

use super::responses::{
    AuthorResponse, CommentResponse, NotificationResponse, PostResponse, ReactionsResponse,
};

// ============================================================================
// Helper structs
// ============================================================================

/// A post with its resolved author, seen by a particular user
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<UserProfile>,
    pub viewer_id: Uuid,
}

/// A comment with its resolved author, seen by a particular user
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Option<UserProfile>,
    pub viewer_id: Uuid,
}

// ============================================================================
// Author & Reaction Mappers
// ============================================================================

impl From<&UserProfile> for AuthorResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.display_name().to_string(),
            role: Some(profile.role),
        }
    }
}

fn author_or_unknown(author_id: Uuid, author: Option<&UserProfile>) -> AuthorResponse {
    author.map_or_else(|| AuthorResponse::unknown(author_id), AuthorResponse::from)
}

impl ReactionsResponse {
    /// Summarize a reaction list from the viewer's point of view
    pub fn for_viewer(list: &ReactionList, viewer_id: Uuid) -> Self {
        let viewer = viewer_id.to_string();
        let summary = list.summary_for(Some(&viewer));
        Self {
            likes: summary.likes,
            dislikes: summary.dislikes,
            me: summary.me,
            liked_by: list.names_by(true).into_iter().map(String::from).collect(),
            disliked_by: list.names_by(false).into_iter().map(String::from).collect(),
        }
    }
}

// ============================================================================
// Post & Comment Mappers
// ============================================================================

impl From<PostWithAuthor> for PostResponse {
    fn from(value: PostWithAuthor) -> Self {
        let PostWithAuthor {
            post,
            author,
            viewer_id,
        } = value;
        Self {
            id: post.id,
            author: author_or_unknown(post.author_id, author.as_ref()),
            reactions: ReactionsResponse::for_viewer(&post.reactions, viewer_id),
            title: post.title,
            content: post.content,
            is_edited: post.is_edited,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(value: CommentWithAuthor) -> Self {
        let CommentWithAuthor {
            comment,
            author,
            viewer_id,
        } = value;
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            author: author_or_unknown(comment.author_id, author.as_ref()),
            reactions: ReactionsResponse::for_viewer(&comment.reactions, viewer_id),
            content: comment.content,
            is_edited: comment.is_edited,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            actor_id: notification.actor_id,
            kind: notification.kind,
            message: notification.message,
            post_id: notification.post_id,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}
