//! PostgreSQL implementation of DiscussionGroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::DiscussionGroup;
use forum_core::traits::{DiscussionGroupRepository, RepoResult};

use crate::models::DiscussionGroupModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DiscussionGroupRepository
#[derive(Clone)]
pub struct PgDiscussionGroupRepository {
    pool: PgPool,
}

impl PgDiscussionGroupRepository {
    /// Create a new PgDiscussionGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiscussionGroupRepository for PgDiscussionGroupRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<DiscussionGroup>> {
        let results = sqlx::query_as::<_, DiscussionGroupModel>(
            r#"
            SELECT id, name, photo_url
            FROM discussion_groups
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DiscussionGroup::from).collect())
    }
}
