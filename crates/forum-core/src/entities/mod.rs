//! Domain entities - core business objects

mod discussion;
mod discussion_group;
mod reply;
mod thread;
mod user;

pub use discussion::Discussion;
pub use discussion_group::DiscussionGroup;
pub use reply::{NewReply, Reply};
pub use thread::{NewThread, Thread};
pub use user::{Instructor, User};
