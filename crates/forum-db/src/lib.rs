//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity / projection mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_common::DatabaseConfig;
//! use forum_core::traits::ThreadRepository;
//! use forum_db::{create_pool, run_migrations, PgThreadRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/forum")).await?;
//!     run_migrations(&pool).await?;
//!     let threads = PgThreadRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool};
pub use repositories::{
    PgDiscussionGroupRepository, PgDiscussionRepository, PgReplyRepository, PgThreadRepository,
};
