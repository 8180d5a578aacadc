//! # forum-core
//!
//! Domain layer containing entities, the reaction list codec, thread assembly,
//! repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod rules;
pub mod threads;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Notification, NotificationKind, Post, UserProfile};
pub use error::DomainError;
pub use events::{DomainEvent, ReactionTarget};
pub use threads::{assemble, Thread};
pub use traits::{
    CommentRepository, NotificationRepository, PageQuery, PostRepository, ProfileRepository,
    RepoResult, StoreHealth,
};
pub use value_objects::{
    ReactionEntry, ReactionList, ReactionStatus, ReactionSummary, Role, RoleParseError,
};
