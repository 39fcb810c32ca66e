//! Reply database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i32,
    pub thread_id: i32,
    pub user_id: i32,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

/// Reply row joined with its author and parent thread topic
#[derive(Debug, Clone, FromRow)]
pub struct ReplyDetailsModel {
    pub id: i32,
    pub thread_id: i32,
    pub user_id: i32,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
    pub thread_topic: String,
    pub author_name: String,
    /// Whether an `instructors` row references the author
    pub author_has_instructor: bool,
}
