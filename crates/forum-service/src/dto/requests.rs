//! Request DTOs for forum operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use forum_core::value_objects::{DiscussionId, ThreadId, UserId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    pub user_id: UserId,

    pub discussion_id: DiscussionId,

    #[validate(length(max = 255, message = "Topic must be at most 255 characters"))]
    pub topic: String,

    pub detail: String,
}

/// Update thread request; replaces topic and detail
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateThreadRequest {
    #[validate(length(max = 255, message = "Topic must be at most 255 characters"))]
    pub topic: String,

    pub detail: String,
}

// ============================================================================
// Reply Requests
// ============================================================================

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    pub user_id: UserId,

    pub thread_id: ThreadId,

    pub detail: String,
}

/// Update reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    pub detail: String,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Upvote adjustment; only `1` and `-1` change the counter
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VoteRequest {
    pub delta: i32,
}

impl VoteRequest {
    pub fn up() -> Self {
        Self { delta: 1 }
    }

    pub fn down() -> Self {
        Self { delta: -1 }
    }
}
