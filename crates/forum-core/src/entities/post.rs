//! Post entity - a top-level forum entry

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReactionList;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_edited: bool,
    pub reactions: ReactionList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Uuid, author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            is_edited: false,
            reactions: ReactionList::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the given user wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Edit title and/or content. Marks the post as edited.
    pub fn edit(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.is_edited = true;
        self.updated_at = Utc::now();
    }
}
