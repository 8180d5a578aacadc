//! Who gets notified about which event

use forum_core::entities::NotificationKind;
use forum_core::events::DomainEvent;
use forum_core::value_objects::ReactionStatus;
use uuid::Uuid;

/// Recipients of one notification job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Every user except the one who acted
    AllExcept(Uuid),
    /// A single user
    User(Uuid),
}

/// A notification job derived from a domain event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPlan {
    pub audience: Audience,
    pub actor_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub post_id: Uuid,
}

/// Map an event to its notification job, if it has one.
///
/// - new post: everyone else
/// - new top-level comment: everyone else
/// - reply: the parent comment's author, unless they wrote the reply
/// - new or switched reaction: the target's author, unless they reacted
pub fn plan_for(event: &DomainEvent) -> Option<NotificationPlan> {
    match event {
        DomainEvent::PostCreated(e) => Some(NotificationPlan {
            audience: Audience::AllExcept(e.author_id),
            actor_id: e.author_id,
            kind: NotificationKind::NewPost,
            message: format!("{} posted \"{}\"", e.author_name, e.title),
            post_id: e.post_id,
        }),
        DomainEvent::CommentCreated(e) => match (e.parent_id, e.parent_author_id) {
            (None, _) => Some(NotificationPlan {
                audience: Audience::AllExcept(e.author_id),
                actor_id: e.author_id,
                kind: NotificationKind::NewComment,
                message: format!("{} commented: {}", e.author_name, e.preview),
                post_id: e.post_id,
            }),
            (Some(_), Some(parent_author)) if parent_author != e.author_id => {
                Some(NotificationPlan {
                    audience: Audience::User(parent_author),
                    actor_id: e.author_id,
                    kind: NotificationKind::NewReply,
                    message: format!("{} replied to your comment: {}", e.author_name, e.preview),
                    post_id: e.post_id,
                })
            }
            (Some(_), _) => None,
        },
        DomainEvent::ReactionToggled(e)
            if e.is_new_or_switched() && e.target_author_id != e.actor_id =>
        {
            let verb = match e.current {
                Some(ReactionStatus::Down) => "disliked",
                _ => "liked",
            };
            Some(NotificationPlan {
                audience: Audience::User(e.target_author_id),
                actor_id: e.actor_id,
                kind: NotificationKind::Reaction,
                message: format!("{} {verb} your {}", e.actor_name, e.target.noun()),
                post_id: e.target.post_id(),
            })
        }
        _ => None,
    }
}
