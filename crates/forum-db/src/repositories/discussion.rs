//! PostgreSQL implementation of DiscussionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Discussion;
use forum_core::projections::DiscussionWithGroup;
use forum_core::traits::{DiscussionRepository, RepoResult};
use forum_core::value_objects::DiscussionId;

use crate::models::{DiscussionModel, DiscussionWithGroupModel};

use super::error::map_db_error;

/// PostgreSQL implementation of DiscussionRepository
#[derive(Clone)]
pub struct PgDiscussionRepository {
    pool: PgPool,
}

impl PgDiscussionRepository {
    /// Create a new PgDiscussionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiscussionRepository for PgDiscussionRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Discussion>> {
        let results = sqlx::query_as::<_, DiscussionModel>(
            r#"
            SELECT id, discussion_group_id, name
            FROM discussions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Discussion::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_with_group(&self, id: DiscussionId) -> RepoResult<Option<DiscussionWithGroup>> {
        // The group is joined in; the discussion's threads are not loaded
        let result = sqlx::query_as::<_, DiscussionWithGroupModel>(
            r#"
            SELECT d.id, d.discussion_group_id, d.name,
                   g.name AS group_name, g.photo_url AS group_photo_url
            FROM discussions d
            INNER JOIN discussion_groups g ON g.id = d.discussion_group_id
            WHERE d.id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DiscussionWithGroup::from))
    }
}
