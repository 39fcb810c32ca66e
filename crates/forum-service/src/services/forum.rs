//! Forum service facade
//!
//! Exposes every forum operation behind one handle that owns the context.

use forum_common::AppConfig;
use forum_core::value_objects::{DiscussionId, ReplyId, ThreadId};

use crate::dto::{
    CreateReplyRequest, CreateThreadRequest, DiscussionGroupView, DiscussionView, ReplyView,
    ThreadView, UpdateReplyRequest, UpdateThreadRequest, VoteRequest, VoteResponse,
};

use super::context::ServiceContext;
use super::discussion::DiscussionService;
use super::error::ServiceResult;
use super::reply::ReplyService;
use super::thread::ThreadService;
use super::vote::VoteService;

/// Entry point for all forum operations
#[derive(Debug, Clone)]
pub struct ForumService {
    ctx: ServiceContext,
}

impl ForumService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Connect to the configured database
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        Ok(Self::new(ServiceContext::connect(config).await?))
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    // === Projections ===

    pub async fn list_discussion_groups(&self) -> ServiceResult<Vec<DiscussionGroupView>> {
        DiscussionService::new(&self.ctx).list_discussion_groups().await
    }

    pub async fn get_discussion(&self, id: DiscussionId) -> ServiceResult<Option<DiscussionView>> {
        DiscussionService::new(&self.ctx).get_discussion(id).await
    }

    pub async fn list_threads_by_discussion(
        &self,
        discussion_id: DiscussionId,
    ) -> ServiceResult<Vec<ThreadView>> {
        ThreadService::new(&self.ctx)
            .list_threads_by_discussion(discussion_id)
            .await
    }

    pub async fn get_thread(&self, id: ThreadId) -> ServiceResult<Option<ThreadView>> {
        ThreadService::new(&self.ctx).get_thread(id).await
    }

    pub async fn list_replies_by_thread(&self, thread_id: ThreadId) -> ServiceResult<Vec<ReplyView>> {
        ReplyService::new(&self.ctx).list_replies_by_thread(thread_id).await
    }

    // === Mutations ===

    pub async fn create_thread(&self, request: CreateThreadRequest) -> ServiceResult<ThreadId> {
        ThreadService::new(&self.ctx).create_thread(request).await
    }

    pub async fn update_thread(&self, id: ThreadId, request: UpdateThreadRequest) -> ServiceResult<()> {
        ThreadService::new(&self.ctx).update_thread(id, request).await
    }

    pub async fn create_reply(&self, request: CreateReplyRequest) -> ServiceResult<ReplyId> {
        ReplyService::new(&self.ctx).create_reply(request).await
    }

    pub async fn update_reply(&self, id: ReplyId, request: UpdateReplyRequest) -> ServiceResult<()> {
        ReplyService::new(&self.ctx).update_reply(id, request).await
    }

    pub async fn delete_reply(&self, id: ReplyId) -> ServiceResult<()> {
        ReplyService::new(&self.ctx).delete_reply(id).await
    }

    // === Votes ===

    pub async fn vote_thread(&self, id: ThreadId, request: VoteRequest) -> ServiceResult<VoteResponse> {
        VoteService::new(&self.ctx).vote_thread(id, request).await
    }

    pub async fn vote_reply(&self, id: ReplyId, request: VoteRequest) -> ServiceResult<VoteResponse> {
        VoteService::new(&self.ctx).vote_reply(id, request).await
    }
}
