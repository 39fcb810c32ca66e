//! View DTOs returned by the projection operations
//!
//! All views implement `Serialize`. Identifiers serialize as plain integers.

use chrono::{DateTime, Utc};
use forum_core::value_objects::{DiscussionGroupId, DiscussionId, ReplyId, ThreadId, UserId};
use serde::Serialize;

// ============================================================================
// Group Listing
// ============================================================================

/// Discussion group with its discussions and their threads
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionGroupView {
    pub id: DiscussionGroupId,
    pub name: String,
    pub photo_url: String,
    pub discussions: Vec<DiscussionView>,
}

/// Parent group attached to a single discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionGroupSummaryView {
    pub id: DiscussionGroupId,
    pub name: String,
    pub photo_url: String,
}

/// Discussion view
///
/// In the group listing `threads` is populated and `discussion_group` is not.
/// `GetDiscussion` does the opposite.
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionView {
    pub id: DiscussionId,
    pub name: String,
    pub discussion_group_id: DiscussionGroupId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_group: Option<DiscussionGroupSummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<Vec<ThreadCountView>>,
}

/// Thread entry of the group listing: id and reply count only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreadCountView {
    pub id: ThreadId,
    pub reply_count: i64,
}

// ============================================================================
// Threads and Replies
// ============================================================================

/// Author summary embedded in thread and reply views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub id: UserId,
    pub name: String,
    pub is_instructor: bool,
}

/// Full thread view
#[derive(Debug, Clone, Serialize)]
pub struct ThreadView {
    pub id: ThreadId,
    pub discussion_id: DiscussionId,
    pub topic: String,
    pub detail: String,
    pub inserted_at: DateTime<Utc>,
    pub upvote: i32,
    pub reply_count: i64,
    pub user: AuthorView,
}

/// Reply view; `topic` is the parent thread's topic
#[derive(Debug, Clone, Serialize)]
pub struct ReplyView {
    pub id: ReplyId,
    pub thread_id: ThreadId,
    pub topic: String,
    pub detail: String,
    pub inserted_at: DateTime<Utc>,
    pub upvote: i32,
    pub user: AuthorView,
}

// ============================================================================
// Votes
// ============================================================================

/// Counter value after a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteResponse {
    pub upvote: i32,
}
