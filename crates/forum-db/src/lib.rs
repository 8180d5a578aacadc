//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers (including the serialized reaction column)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_common::AppConfig;
//! use forum_db::{create_pool, run_migrations, PgPostRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let posts = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{run_migrations, EmbeddedMigrations};
pub use pool::{create_pool, PgPool, PoolTimeouts};
pub use repositories::{
    PgCommentRepository, PgNotificationRepository, PgPostRepository, PgProfileRepository,
    PgStoreHealth,
};
