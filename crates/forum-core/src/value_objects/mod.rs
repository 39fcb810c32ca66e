//! Value objects - immutable types that represent domain concepts

mod ids;
mod vote;

pub use ids::{
    DiscussionGroupId, DiscussionId, IdParseError, InstructorId, ReplyId, ThreadId, UserId,
};
pub use vote::{adjust_vote, VoteDelta, VoteOutcome};
