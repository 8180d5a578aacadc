//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, NotificationRepository, PageQuery, PostRepository, ProfileRepository,
    RepoResult, StoreHealth,
};
