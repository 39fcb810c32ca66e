//! Repository traits (ports)

mod repositories;

pub use repositories::{
    DiscussionGroupRepository, DiscussionRepository, RepoResult, ReplyRepository,
    ThreadRepository,
};
