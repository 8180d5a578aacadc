//! Domain events - events emitted when forum state changes
//!
//! These events are used for:
//! - Feeding the notification fan-out queue
//! - Audit logging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::ReactionStatus;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    // =========================================================================
    // Post Events
    // =========================================================================
    PostCreated(PostCreatedEvent),
    PostUpdated(PostUpdatedEvent),
    PostDeleted(PostDeletedEvent),

    // =========================================================================
    // Comment Events
    // =========================================================================
    CommentCreated(CommentCreatedEvent),
    CommentUpdated(CommentUpdatedEvent),
    CommentDeleted(CommentDeletedEvent),

    // =========================================================================
    // Reaction Events
    // =========================================================================
    ReactionToggled(ReactionToggledEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PostCreated(_) => "POST_CREATED",
            Self::PostUpdated(_) => "POST_UPDATED",
            Self::PostDeleted(_) => "POST_DELETED",
            Self::CommentCreated(_) => "COMMENT_CREATED",
            Self::CommentUpdated(_) => "COMMENT_UPDATED",
            Self::CommentDeleted(_) => "COMMENT_DELETED",
            Self::ReactionToggled(_) => "REACTION_TOGGLED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::PostCreated(e) => e.timestamp,
            Self::PostUpdated(e) => e.timestamp,
            Self::PostDeleted(e) => e.timestamp,
            Self::CommentCreated(e) => e.timestamp,
            Self::CommentUpdated(e) => e.timestamp,
            Self::CommentDeleted(e) => e.timestamp,
            Self::ReactionToggled(e) => e.timestamp,
        }
    }
}

/// The post or comment a reaction was toggled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReactionTarget {
    Post { post_id: Uuid },
    Comment { post_id: Uuid, comment_id: Uuid },
}

impl ReactionTarget {
    pub fn post_id(&self) -> Uuid {
        match self {
            Self::Post { post_id } | Self::Comment { post_id, .. } => *post_id,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            Self::Post { .. } => "post",
            Self::Comment { .. } => "comment",
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreatedEvent {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdatedEvent {
    pub post_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDeletedEvent {
    pub post_id: Uuid,
    pub deleted_by: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreatedEvent {
    pub comment_id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub parent_id: Option<Uuid>,
    /// Author of the parent comment, present for replies
    pub parent_author_id: Option<Uuid>,
    pub preview: String,
    pub timestamp: DateTime<Utc>,
}

impl CommentCreatedEvent {
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentUpdatedEvent {
    pub comment_id: Uuid,
    pub post_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDeletedEvent {
    pub comment_id: Uuid,
    pub post_id: Uuid,
    pub deleted_by: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionToggledEvent {
    pub target: ReactionTarget,
    pub target_author_id: Uuid,
    pub actor_id: Uuid,
    pub actor_name: String,
    /// Actor's status before the toggle
    pub previous: Option<ReactionStatus>,
    /// Actor's status after the toggle, `None` when cancelled
    pub current: Option<ReactionStatus>,
    pub timestamp: DateTime<Utc>,
}

impl ReactionToggledEvent {
    /// True for a newly added or switched reaction, false for a removal
    pub fn is_new_or_switched(&self) -> bool {
        self.current.is_some() && self.current != self.previous
    }
}
