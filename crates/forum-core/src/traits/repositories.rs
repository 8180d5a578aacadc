//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Reaction lists cross this boundary in their
//! encoded column form so the write path stores exactly what the codec
//! produced.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Comment, Notification, Post, UserProfile};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Cursor pagination for newest-first listings
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    /// Only return rows created strictly before this instant
    pub before: Option<DateTime<Utc>>,
    pub limit: i64,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(before: Option<DateTime<Utc>>, limit: i64) -> Self {
        Self {
            before,
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            before: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// List posts newest first
    async fn list(&self, query: PageQuery) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Persist title, content and edit flag
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and its comments
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Overwrite the serialized reaction column
    async fn update_reactions(&self, id: Uuid, encoded: &str) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// All comments of a post, oldest first
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<Comment>>;

    /// Create a new comment or reply
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Persist content and edit flag
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment; stored replies go with it
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Overwrite the serialized reaction column
    async fn update_reactions(&self, id: Uuid, encoded: &str) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserProfile>>;

    /// Resolve several profiles at once; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<UserProfile>>;

    /// Every user id except the given one
    async fn list_ids_except(&self, excluded: Uuid) -> RepoResult<Vec<Uuid>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a batch of notifications, returning how many were written
    async fn create_many(&self, notifications: &[Notification]) -> RepoResult<u64>;

    /// Find notification by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Notification>>;

    /// A recipient's notifications, newest first
    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        query: PageQuery,
    ) -> RepoResult<Vec<Notification>>;

    /// Flag a notification as read
    async fn mark_read(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Store Health
// ============================================================================

/// Readiness probe for the backing store
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
