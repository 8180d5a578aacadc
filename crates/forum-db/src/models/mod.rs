//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod notification;
mod post;
mod profile;

pub use comment::CommentModel;
pub use notification::NotificationModel;
pub use post::PostModel;
pub use profile::ProfileModel;
