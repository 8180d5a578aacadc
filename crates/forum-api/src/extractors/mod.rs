//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Pagination, PaginationParams};
pub use path::{IdPath, PostCommentPath};
pub use validated::ValidatedJson;
