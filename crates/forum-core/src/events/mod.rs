//! Domain events emitted by the forum services

mod domain_event;

pub use domain_event::{
    CommentCreatedEvent, CommentDeletedEvent, CommentUpdatedEvent, DomainEvent, PostCreatedEvent,
    PostDeletedEvent, PostUpdatedEvent, ReactionTarget, ReactionToggledEvent,
};
