//! Comment entity - a reply to a post, optionally nested under another comment

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReactionList;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_id: Uuid,
    pub content: String,
    pub is_edited: bool,
    pub reactions: ReactionList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level Comment
    pub fn new(id: Uuid, post_id: Uuid, author_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            parent_id: None,
            author_id,
            content,
            is_edited: false,
            reactions: ReactionList::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to another comment on the same post
    pub fn new_reply(
        id: Uuid,
        post_id: Uuid,
        author_id: Uuid,
        content: String,
        parent_id: Uuid,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, post_id, author_id, content)
        }
    }

    /// Check if comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Edit the comment content
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.is_edited = true;
        self.updated_at = Utc::now();
    }

    /// Get a truncated preview of the comment (for notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        preview(&self.content, max_len)
    }
}

fn preview(content: &str, max_len: usize) -> &str {
    if content.len() <= max_len {
        content
    } else {
        let mut end = max_len;
        while !content.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        &content[..end]
    }
}
