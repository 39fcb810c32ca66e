//! Thread service
//!
//! Handles thread creation, editing and thread projections.

use forum_core::entities::NewThread;
use forum_core::value_objects::{DiscussionId, ThreadId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateThreadRequest, ThreadView, UpdateThreadRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the threads of a discussion with authors and reply counts
    ///
    /// An unknown discussion yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_threads_by_discussion(
        &self,
        discussion_id: DiscussionId,
    ) -> ServiceResult<Vec<ThreadView>> {
        let threads = self
            .ctx
            .thread_repo()
            .find_details_by_discussion(discussion_id)
            .await?;

        Ok(threads.into_iter().map(ThreadView::from).collect())
    }

    /// Get a single thread view
    #[instrument(skip(self))]
    pub async fn get_thread(&self, id: ThreadId) -> ServiceResult<Option<ThreadView>> {
        let thread = self.ctx.thread_repo().find_details(id).await?;
        Ok(thread.map(ThreadView::from))
    }

    /// Create a thread with a zero score
    ///
    /// Author and discussion are not looked up first; the store rejects
    /// dangling references.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, discussion_id = %request.discussion_id))]
    pub async fn create_thread(&self, request: CreateThreadRequest) -> ServiceResult<ThreadId> {
        request.validate()?;

        let new_thread = NewThread::new(
            request.user_id,
            request.discussion_id,
            request.topic,
            request.detail,
        );
        let thread = self.ctx.thread_repo().create(&new_thread).await?;

        info!(thread_id = %thread.id, discussion_id = %thread.discussion_id, "Thread created");

        Ok(thread.id)
    }

    /// Replace topic and detail of an existing thread
    #[instrument(skip(self, request))]
    pub async fn update_thread(&self, id: ThreadId, request: UpdateThreadRequest) -> ServiceResult<()> {
        request.validate()?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", id.to_string()))?;

        thread.edit(request.topic, request.detail);
        self.ctx.thread_repo().update(&thread).await?;

        info!(thread_id = %id, "Thread updated");

        Ok(())
    }
}
