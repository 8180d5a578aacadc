//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, authorization, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod notification;
pub mod permission;
pub mod post;

mod lookup;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use permission::PermissionService;
pub use post::PostService;
