//! Thread model -> entity / projection mappers

use forum_core::entities::Thread;
use forum_core::projections::{AuthorSummary, ThreadDetails, ThreadReplyCount};
use forum_core::value_objects::{DiscussionId, ThreadId, UserId};

use crate::models::{ThreadDetailsModel, ThreadModel, ThreadReplyCountModel};

/// Convert ThreadModel to Thread entity
impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: ThreadId::new(model.id),
            discussion_id: DiscussionId::new(model.discussion_id),
            user_id: UserId::new(model.user_id),
            topic: model.topic,
            detail: model.detail,
            upvote: model.upvote,
            inserted_at: model.inserted_at,
        }
    }
}

/// Convert a thread/author join; the author flag is the stored user flag
impl From<ThreadDetailsModel> for ThreadDetails {
    fn from(model: ThreadDetailsModel) -> Self {
        let user_id = UserId::new(model.user_id);
        ThreadDetails {
            thread: Thread {
                id: ThreadId::new(model.id),
                discussion_id: DiscussionId::new(model.discussion_id),
                user_id,
                topic: model.topic,
                detail: model.detail,
                upvote: model.upvote,
                inserted_at: model.inserted_at,
            },
            author: AuthorSummary {
                user_id,
                name: model.author_name,
                is_instructor: model.author_is_instructor,
            },
            reply_count: model.reply_count,
        }
    }
}

impl From<ThreadReplyCountModel> for ThreadReplyCount {
    fn from(model: ThreadReplyCountModel) -> Self {
        ThreadReplyCount {
            thread_id: ThreadId::new(model.thread_id),
            discussion_id: DiscussionId::new(model.discussion_id),
            reply_count: model.reply_count,
        }
    }
}
