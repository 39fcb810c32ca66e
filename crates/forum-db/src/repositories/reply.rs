//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewReply, Reply};
use forum_core::projections::ReplyDetails;
use forum_core::traits::{RepoResult, ReplyRepository};
use forum_core::value_objects::{ReplyId, ThreadId};

use crate::models::{ReplyDetailsModel, ReplyModel};

use super::error::{map_db_error, map_write_error, reply_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, thread_id, user_id, detail, upvote, inserted_at
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_details_by_thread(&self, thread_id: ThreadId) -> RepoResult<Vec<ReplyDetails>> {
        // Instructor status here is the presence of an instructors row, not users.is_instructor
        let results = sqlx::query_as::<_, ReplyDetailsModel>(
            r#"
            SELECT r.id, r.thread_id, r.user_id, r.detail, r.upvote, r.inserted_at,
                   t.topic AS thread_topic,
                   u.name AS author_name,
                   EXISTS(SELECT 1 FROM instructors i WHERE i.user_id = r.user_id) AS author_has_instructor
            FROM replies r
            INNER JOIN threads t ON t.id = r.thread_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.thread_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(thread_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReplyDetails::from).collect())
    }

    #[instrument(skip(self, reply), fields(thread_id = %reply.thread_id, user_id = %reply.user_id))]
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO replies (thread_id, user_id, detail, upvote, inserted_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(reply.thread_id.into_inner())
        .bind(reply.user_id.into_inner())
        .bind(&reply.detail)
        .bind(reply.upvote)
        .bind(reply.inserted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(reply.clone().into_reply(ReplyId::new(id)))
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        let result = sqlx::query("UPDATE replies SET detail = $2 WHERE id = $1")
            .bind(reply.id.into_inner())
            .bind(&reply.detail)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ReplyId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM replies WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_upvote(&self, id: ReplyId, upvote: i32) -> RepoResult<()> {
        let result = sqlx::query("UPDATE replies SET upvote = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(upvote)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(id));
        }

        Ok(())
    }
}
