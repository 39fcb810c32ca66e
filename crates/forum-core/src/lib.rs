//! # forum-core
//!
//! Domain layer containing entities, value objects, read projections and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod projections;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Discussion, DiscussionGroup, Instructor, NewReply, NewThread, Reply, Thread, User,
};
pub use error::DomainError;
pub use projections::{
    AuthorSummary, DiscussionWithGroup, ReplyDetails, ThreadDetails, ThreadReplyCount,
};
pub use traits::{
    DiscussionGroupRepository, DiscussionRepository, RepoResult, ReplyRepository,
    ThreadRepository,
};
pub use value_objects::{
    adjust_vote, DiscussionGroupId, DiscussionId, IdParseError, InstructorId, ReplyId, ThreadId,
    UserId, VoteDelta, VoteOutcome,
};
