//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Read methods return projections that load
//! exactly the relations their view requires.

use async_trait::async_trait;

use crate::entities::{Discussion, DiscussionGroup, NewReply, NewThread, Reply, Thread};
use crate::error::DomainError;
use crate::projections::{DiscussionWithGroup, ReplyDetails, ThreadDetails, ThreadReplyCount};
use crate::value_objects::{DiscussionId, ReplyId, ThreadId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Discussion Group Repository
// ============================================================================

#[async_trait]
pub trait DiscussionGroupRepository: Send + Sync {
    /// List every group
    async fn find_all(&self) -> RepoResult<Vec<DiscussionGroup>>;
}

// ============================================================================
// Discussion Repository
// ============================================================================

#[async_trait]
pub trait DiscussionRepository: Send + Sync {
    /// List every discussion across all groups
    async fn find_all(&self) -> RepoResult<Vec<Discussion>>;

    /// Find a discussion together with its parent group
    async fn find_with_group(&self, id: DiscussionId) -> RepoResult<Option<DiscussionWithGroup>>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID
    async fn find_by_id(&self, id: ThreadId) -> RepoResult<Option<Thread>>;

    /// Find a thread with its author and reply count
    async fn find_details(&self, id: ThreadId) -> RepoResult<Option<ThreadDetails>>;

    /// List threads of a discussion with authors and reply counts
    async fn find_details_by_discussion(
        &self,
        discussion_id: DiscussionId,
    ) -> RepoResult<Vec<ThreadDetails>>;

    /// Reply count of every thread, without authors
    async fn reply_counts(&self) -> RepoResult<Vec<ThreadReplyCount>>;

    /// Insert a new thread and return it with its assigned id
    async fn create(&self, thread: &NewThread) -> RepoResult<Thread>;

    /// Persist topic and detail of an existing thread
    async fn update(&self, thread: &Thread) -> RepoResult<()>;

    /// Persist a new upvote value
    async fn update_upvote(&self, id: ThreadId, upvote: i32) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find reply by ID
    async fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>>;

    /// List replies of a thread with authors and the thread topic
    async fn find_details_by_thread(&self, thread_id: ThreadId) -> RepoResult<Vec<ReplyDetails>>;

    /// Insert a new reply and return it with its assigned id
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply>;

    /// Persist the detail of an existing reply
    async fn update(&self, reply: &Reply) -> RepoResult<()>;

    /// Remove a reply
    async fn delete(&self, id: ReplyId) -> RepoResult<()>;

    /// Persist a new upvote value
    async fn update_upvote(&self, id: ReplyId, upvote: i32) -> RepoResult<()>;
}
