//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, ToggleReactionRequest, UpdateCommentRequest,
    UpdatePostRequest,
};

pub use responses::{
    AuthorResponse, CommentResponse, HealthChecks, HealthResponse,
    NotificationResponse, PaginatedResponse, PaginationMeta, PostResponse, ReactionsResponse,
    ReadinessResponse, ThreadResponse,
};

pub use mappers::{CommentWithAuthor, PostWithAuthor};
