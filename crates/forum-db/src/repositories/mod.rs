//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.

mod comment;
mod error;
mod health;
mod notification;
mod post;
mod profile;

pub use comment::PgCommentRepository;
pub use health::PgStoreHealth;
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
