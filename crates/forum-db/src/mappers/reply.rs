//! Reply model -> entity / projection mappers

use forum_core::entities::Reply;
use forum_core::projections::{AuthorSummary, ReplyDetails};
use forum_core::value_objects::{ReplyId, ThreadId, UserId};

use crate::models::{ReplyDetailsModel, ReplyModel};

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: ReplyId::new(model.id),
            thread_id: ThreadId::new(model.thread_id),
            user_id: UserId::new(model.user_id),
            detail: model.detail,
            upvote: model.upvote,
            inserted_at: model.inserted_at,
        }
    }
}

/// Convert a reply/author/thread join; the author flag comes from the instructor relation
impl From<ReplyDetailsModel> for ReplyDetails {
    fn from(model: ReplyDetailsModel) -> Self {
        let user_id = UserId::new(model.user_id);
        ReplyDetails {
            reply: Reply {
                id: ReplyId::new(model.id),
                thread_id: ThreadId::new(model.thread_id),
                user_id,
                detail: model.detail,
                upvote: model.upvote,
                inserted_at: model.inserted_at,
            },
            thread_topic: model.thread_topic,
            author: AuthorSummary {
                user_id,
                name: model.author_name,
                is_instructor: model.author_has_instructor,
            },
        }
    }
}
