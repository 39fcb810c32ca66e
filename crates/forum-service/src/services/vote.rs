//! Vote service
//!
//! Upvote adjustment for threads and replies. The counter is read, moved by
//! one step and written back without locking, so concurrent votes on the same
//! post race and the last write wins.

use std::fmt::Display;

use forum_core::value_objects::{adjust_vote, ReplyId, ThreadId, VoteOutcome};
use tracing::{debug, instrument, warn};

use crate::dto::{VoteRequest, VoteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Adjust a thread's upvote counter
    #[instrument(skip(self))]
    pub async fn vote_thread(&self, id: ThreadId, request: VoteRequest) -> ServiceResult<VoteResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", id.to_string()))?;

        let outcome = evaluate("thread", id, thread.upvote, request.delta);
        if outcome.needs_write() {
            self.ctx.thread_repo().update_upvote(id, outcome.value()).await?;
        }

        Ok(VoteResponse {
            upvote: outcome.value(),
        })
    }

    /// Adjust a reply's upvote counter
    #[instrument(skip(self))]
    pub async fn vote_reply(&self, id: ReplyId, request: VoteRequest) -> ServiceResult<VoteResponse> {
        let reply = self
            .ctx
            .reply_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reply", id.to_string()))?;

        let outcome = evaluate("reply", id, reply.upvote, request.delta);
        if outcome.needs_write() {
            self.ctx.reply_repo().update_upvote(id, outcome.value()).await?;
        }

        Ok(VoteResponse {
            upvote: outcome.value(),
        })
    }
}

/// Apply the vote arithmetic and log anything that leaves the counter as is
fn evaluate(target: &'static str, id: impl Display, current: i32, delta: i32) -> VoteOutcome {
    let outcome = adjust_vote(current, delta);
    match outcome {
        VoteOutcome::Applied(upvote) => {
            debug!(target_kind = target, id = %id, upvote, "Vote applied");
        }
        VoteOutcome::InvalidDelta(upvote) => {
            warn!(target_kind = target, id = %id, delta, upvote, "Ignoring vote with invalid delta");
        }
        VoteOutcome::Saturated(upvote) => {
            warn!(target_kind = target, id = %id, delta, upvote, "Upvote counter saturated; vote skipped");
        }
    }
    outcome
}
