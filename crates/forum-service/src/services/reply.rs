//! Reply service
//!
//! Handles reply creation, editing, deletion and the reply listing.

use forum_core::entities::NewReply;
use forum_core::value_objects::{ReplyId, ThreadId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateReplyRequest, ReplyView, UpdateReplyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the replies of a thread
    ///
    /// Each reply carries its thread's topic. The author counts as an
    /// instructor when an instructor record references them.
    #[instrument(skip(self))]
    pub async fn list_replies_by_thread(&self, thread_id: ThreadId) -> ServiceResult<Vec<ReplyView>> {
        let replies = self.ctx.reply_repo().find_details_by_thread(thread_id).await?;
        Ok(replies.into_iter().map(ReplyView::from).collect())
    }

    /// Create a reply with a zero score
    #[instrument(skip(self, request), fields(user_id = %request.user_id, thread_id = %request.thread_id))]
    pub async fn create_reply(&self, request: CreateReplyRequest) -> ServiceResult<ReplyId> {
        request.validate()?;

        let new_reply = NewReply::new(request.user_id, request.thread_id, request.detail);
        let reply = self.ctx.reply_repo().create(&new_reply).await?;

        info!(reply_id = %reply.id, thread_id = %reply.thread_id, "Reply created");

        Ok(reply.id)
    }

    /// Replace the detail of an existing reply
    #[instrument(skip(self, request))]
    pub async fn update_reply(&self, id: ReplyId, request: UpdateReplyRequest) -> ServiceResult<()> {
        request.validate()?;

        let mut reply = self
            .ctx
            .reply_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reply", id.to_string()))?;

        reply.edit(request.detail);
        self.ctx.reply_repo().update(&reply).await?;

        info!(reply_id = %id, "Reply updated");

        Ok(())
    }

    /// Delete a reply
    #[instrument(skip(self))]
    pub async fn delete_reply(&self, id: ReplyId) -> ServiceResult<()> {
        let reply = self
            .ctx
            .reply_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reply", id.to_string()))?;

        self.ctx.reply_repo().delete(reply.id).await?;

        info!(reply_id = %id, thread_id = %reply.thread_id, "Reply deleted");

        Ok(())
    }
}
