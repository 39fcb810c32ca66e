//! Database models - SQLx-compatible structs for PostgreSQL tables and joins

mod discussion;
mod discussion_group;
mod reply;
mod thread;

pub use discussion::{DiscussionModel, DiscussionWithGroupModel};
pub use discussion_group::DiscussionGroupModel;
pub use reply::{ReplyDetailsModel, ReplyModel};
pub use thread::{ThreadDetailsModel, ThreadModel, ThreadReplyCountModel};
