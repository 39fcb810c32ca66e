//! Thread database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: i32,
    pub discussion_id: i32,
    pub user_id: i32,
    pub topic: String,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

/// Thread row joined with its author and the number of replies
#[derive(Debug, Clone, FromRow)]
pub struct ThreadDetailsModel {
    pub id: i32,
    pub discussion_id: i32,
    pub user_id: i32,
    pub topic: String,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
    pub author_name: String,
    /// Stored `users.is_instructor` flag
    pub author_is_instructor: bool,
    pub reply_count: i64,
}

/// Per-thread reply count (group listing)
#[derive(Debug, Clone, FromRow)]
pub struct ThreadReplyCountModel {
    pub thread_id: i32,
    pub discussion_id: i32,
    pub reply_count: i64,
}
