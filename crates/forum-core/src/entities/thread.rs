//! Thread entity - a topic-starting post within a discussion

use chrono::{DateTime, Utc};

use crate::value_objects::{DiscussionId, ThreadId, UserId};

/// Persisted thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub discussion_id: DiscussionId,
    pub user_id: UserId,
    pub topic: String,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

impl Thread {
    /// Overwrite topic and detail, leaving everything else untouched
    pub fn edit(&mut self, topic: String, detail: String) {
        self.topic = topic;
        self.detail = detail;
    }

    /// Check if the thread was written by the given user
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Thread that has not been stored yet; the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub discussion_id: DiscussionId,
    pub user_id: UserId,
    pub topic: String,
    pub detail: String,
    pub upvote: i32,
    pub inserted_at: DateTime<Utc>,
}

impl NewThread {
    /// Create a thread with a zero score, timestamped now
    pub fn new(user_id: UserId, discussion_id: DiscussionId, topic: String, detail: String) -> Self {
        Self {
            discussion_id,
            user_id,
            topic,
            detail,
            upvote: 0,
            inserted_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_thread(self, id: ThreadId) -> Thread {
        Thread {
            id,
            discussion_id: self.discussion_id,
            user_id: self.user_id,
            topic: self.topic,
            detail: self.detail,
            upvote: self.upvote,
            inserted_at: self.inserted_at,
        }
    }
}
