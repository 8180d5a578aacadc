//! Test fixtures and data generators
//!
//! Provides member profiles, request bodies and response shapes for tests.

use forum_core::entities::UserProfile;
use forum_core::value_objects::Role;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Profiles
// ============================================================================

/// A committee member with the given display name
pub fn member(name: &str) -> UserProfile {
    profile(name, Role::Member)
}

/// A portal admin with the given display name
pub fn admin(name: &str) -> UserProfile {
    profile(name, Role::Admin)
}

fn profile(name: &str, role: Role) -> UserProfile {
    let suffix = unique_suffix();
    UserProfile::new(
        Uuid::new_v4(),
        name.to_string(),
        format!("{}{suffix}@committee.example", name.to_lowercase()),
        role,
    )
}

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostBody {
    pub title: String,
    pub content: String,
}

impl CreatePostBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Agenda item {suffix}"),
            content: format!("Proposal text {suffix}"),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentBody {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

impl CreateCommentBody {
    pub fn top_level(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: None,
        }
    }

    pub fn reply(content: &str, parent_id: Uuid) -> Self {
        Self {
            content: content.to_string(),
            parent_id: Some(parent_id),
        }
    }
}

/// Toggle reaction request
#[derive(Debug, Serialize)]
pub struct ReactionBody {
    pub is_like: bool,
}

impl ReactionBody {
    pub fn like() -> Self {
        Self { is_like: true }
    }

    pub fn dislike() -> Self {
        Self { is_like: false }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Author as returned by the API
#[derive(Debug, Deserialize)]
pub struct AuthorBody {
    pub id: Uuid,
    pub name: String,
}

/// Reaction summary as returned by the API
#[derive(Debug, Deserialize)]
pub struct ReactionsBody {
    pub likes: usize,
    pub dislikes: usize,
    pub me: Option<String>,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: Uuid,
    pub author: AuthorBody,
    pub title: String,
    pub content: String,
    pub is_edited: bool,
    pub reactions: ReactionsBody,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author: AuthorBody,
    pub content: String,
    pub is_edited: bool,
    pub reactions: ReactionsBody,
}

/// Thread response
#[derive(Debug, Deserialize)]
pub struct ThreadBody {
    pub parent: CommentBody,
    pub replies: Vec<CommentBody>,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationBody {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub kind: String,
    pub message: String,
    pub post_id: Option<Uuid>,
    pub is_read: bool,
}

/// Paginated list response
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub before: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
