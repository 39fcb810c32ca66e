//! Service context - dependency container for services
//!
//! Holds the repositories the forum services read from and write to.

use std::sync::Arc;

use forum_common::{AppConfig, AppError};
use forum_core::traits::{
    DiscussionGroupRepository, DiscussionRepository, ReplyRepository, ThreadRepository,
};
use forum_db::{
    create_pool, PgDiscussionGroupRepository, PgDiscussionRepository, PgPool, PgReplyRepository,
    PgThreadRepository,
};
use tracing::info;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Every repository shares one connection pool. Operations check a
/// connection out per query and never hold one across calls.
#[derive(Clone)]
pub struct ServiceContext {
    group_repo: Arc<dyn DiscussionGroupRepository>,
    discussion_repo: Arc<dyn DiscussionRepository>,
    thread_repo: Arc<dyn ThreadRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        group_repo: Arc<dyn DiscussionGroupRepository>,
        discussion_repo: Arc<dyn DiscussionRepository>,
        thread_repo: Arc<dyn ThreadRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            group_repo,
            discussion_repo,
            thread_repo,
            reply_repo,
        }
    }

    /// Wire PostgreSQL repositories over an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgDiscussionGroupRepository::new(pool.clone())),
            Arc::new(PgDiscussionRepository::new(pool.clone())),
            Arc::new(PgThreadRepository::new(pool.clone())),
            Arc::new(PgReplyRepository::new(pool)),
        )
    }

    /// Open a pool from configuration and wire the repositories
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| ServiceError::from(AppError::internal(e)))?;

        info!(
            max_connections = config.database.max_connections,
            "Database pool ready"
        );

        Ok(Self::from_pool(pool))
    }

    // === Repositories ===

    /// Get the discussion group repository
    pub fn group_repo(&self) -> &dyn DiscussionGroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the discussion repository
    pub fn discussion_repo(&self) -> &dyn DiscussionRepository {
        self.discussion_repo.as_ref()
    }

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
pub struct ServiceContextBuilder {
    group_repo: Option<Arc<dyn DiscussionGroupRepository>>,
    discussion_repo: Option<Arc<dyn DiscussionRepository>>,
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            group_repo: None,
            discussion_repo: None,
            thread_repo: None,
            reply_repo: None,
        }
    }

    pub fn group_repo(mut self, repo: Arc<dyn DiscussionGroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn discussion_repo(mut self, repo: Arc<dyn DiscussionRepository>) -> Self {
        self.discussion_repo = Some(repo);
        self
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.group_repo
                .ok_or_else(|| ServiceError::validation("group_repo is required"))?,
            self.discussion_repo
                .ok_or_else(|| ServiceError::validation("discussion_repo is required"))?,
            self.thread_repo
                .ok_or_else(|| ServiceError::validation("thread_repo is required"))?,
            self.reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
