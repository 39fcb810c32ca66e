//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewThread, Thread};
use forum_core::projections::{ThreadDetails, ThreadReplyCount};
use forum_core::traits::{RepoResult, ThreadRepository};
use forum_core::value_objects::{DiscussionId, ThreadId};

use crate::models::{ThreadDetailsModel, ThreadModel, ThreadReplyCountModel};

use super::error::{map_db_error, map_write_error, thread_not_found};

/// Columns of the thread/author join; reply count is computed per row
const DETAILS_SELECT: &str = r#"
    SELECT t.id, t.discussion_id, t.user_id, t.topic, t.detail, t.upvote, t.inserted_at,
           u.name AS author_name,
           u.is_instructor AS author_is_instructor,
           (SELECT COUNT(*) FROM replies r WHERE r.thread_id = t.id) AS reply_count
    FROM threads t
    INNER JOIN users u ON u.id = t.user_id
"#;

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ThreadId) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r#"
            SELECT id, discussion_id, user_id, topic, detail, upvote, inserted_at
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thread::from))
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: ThreadId) -> RepoResult<Option<ThreadDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE t.id = $1");
        let result = sqlx::query_as::<_, ThreadDetailsModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ThreadDetails::from))
    }

    #[instrument(skip(self))]
    async fn find_details_by_discussion(
        &self,
        discussion_id: DiscussionId,
    ) -> RepoResult<Vec<ThreadDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE t.discussion_id = $1 ORDER BY t.id");
        let results = sqlx::query_as::<_, ThreadDetailsModel>(&sql)
            .bind(discussion_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(ThreadDetails::from).collect())
    }

    #[instrument(skip(self))]
    async fn reply_counts(&self) -> RepoResult<Vec<ThreadReplyCount>> {
        let results = sqlx::query_as::<_, ThreadReplyCountModel>(
            r#"
            SELECT t.id AS thread_id, t.discussion_id, COUNT(r.id) AS reply_count
            FROM threads t
            LEFT JOIN replies r ON r.thread_id = t.id
            GROUP BY t.id, t.discussion_id
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ThreadReplyCount::from).collect())
    }

    #[instrument(skip(self, thread), fields(discussion_id = %thread.discussion_id, user_id = %thread.user_id))]
    async fn create(&self, thread: &NewThread) -> RepoResult<Thread> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO threads (discussion_id, user_id, topic, detail, upvote, inserted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(thread.discussion_id.into_inner())
        .bind(thread.user_id.into_inner())
        .bind(&thread.topic)
        .bind(&thread.detail)
        .bind(thread.upvote)
        .bind(thread.inserted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(thread.clone().into_thread(ThreadId::new(id)))
    }

    #[instrument(skip(self, thread), fields(thread_id = %thread.id))]
    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE threads
            SET topic = $2, detail = $3
            WHERE id = $1
            "#,
        )
        .bind(thread.id.into_inner())
        .bind(&thread.topic)
        .bind(&thread.detail)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(thread.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_upvote(&self, id: ThreadId, upvote: i32) -> RepoResult<()> {
        let result = sqlx::query("UPDATE threads SET upvote = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(upvote)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(id));
        }

        Ok(())
    }
}
