//! Reply entity - a response to a thread

use chrono::{DateTime, Utc};

use crate::value_objects::{ReplyId, ThreadId, UserId};

/// Persisted reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub thread_id: ThreadId,
    pub user_id: UserId,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

impl Reply {
    /// Overwrite the reply text
    pub fn edit(&mut self, detail: String) {
        self.detail = detail;
    }
}

/// Reply that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub thread_id: ThreadId,
    pub user_id: UserId,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

impl NewReply {
    /// Create a reply with a zero score, timestamped now
    pub fn new(user_id: UserId, thread_id: ThreadId, detail: String) -> Self {
        Self {
            thread_id,
            user_id,
            detail,
            upvote: 0,
            inserted_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_reply(self, id: ReplyId) -> Reply {
        Reply {
            id,
            thread_id: self.thread_id,
            user_id: self.user_id,
            detail: self.detail,
            upvote: self.upvote,
            inserted_at: self.inserted_at,
        }
    }
}
