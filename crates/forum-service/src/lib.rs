//! # forum-service
//!
//! Application layer containing forum use cases, DTOs, and the notification
//! fan-out queue.

pub mod dto;
pub mod notifications;
pub mod services;

pub use dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, HealthResponse,
    NotificationResponse, PaginatedResponse, PostResponse, ReactionsResponse, ReadinessResponse,
    ThreadResponse, ToggleReactionRequest, UpdateCommentRequest, UpdatePostRequest,
};
pub use notifications::{NotificationDispatcher, NotificationWorker};
pub use services::{
    CommentService, NotificationService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
