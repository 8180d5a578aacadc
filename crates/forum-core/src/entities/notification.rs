//! Notification entity - an in-app message for one recipient

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewPost,
    NewComment,
    NewReply,
    Reaction,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewPost => "new_post",
            Self::NewComment => "new_comment",
            Self::NewReply => "new_reply",
            Self::Reaction => "reaction",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_post" => Ok(Self::NewPost),
            "new_comment" => Ok(Self::NewComment),
            "new_reply" => Ok(Self::NewReply),
            "reaction" => Ok(Self::Reaction),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub post_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread Notification
    pub fn new(
        recipient_id: Uuid,
        actor_id: Uuid,
        kind: NotificationKind,
        message: String,
        post_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            actor_id,
            kind,
            message,
            post_id,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_for(&self, user_id: Uuid) -> bool {
        self.recipient_id == user_id
    }
}
