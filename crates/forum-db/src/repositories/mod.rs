//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod discussion;
mod discussion_group;
mod error;
mod reply;
mod thread;

pub use discussion::PgDiscussionRepository;
pub use discussion_group::PgDiscussionGroupRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
