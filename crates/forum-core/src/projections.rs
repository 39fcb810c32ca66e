//! Read projections returned by repository queries
//!
//! These are the rows of the explicit joins the store runs for the read side.
//! Each one carries exactly the relations its view needs and nothing more.

use crate::entities::{Discussion, DiscussionGroup, Reply, Thread};
use crate::value_objects::{DiscussionId, ThreadId, UserId};

/// Author fields embedded in thread and reply views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub user_id: UserId,
    pub name: String,
    pub is_instructor: bool,
}

/// Thread id with its computed reply count, used by the group listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadReplyCount {
    pub thread_id: ThreadId,
    pub discussion_id: DiscussionId,
    pub reply_count: i64,
}

/// Thread joined with its author; `author.is_instructor` is the user's stored flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDetails {
    pub thread: Thread,
    pub author: AuthorSummary,
    pub reply_count: i64,
}

/// Reply joined with its author and parent topic
///
/// `author.is_instructor` is true when an instructor record references the
/// author, not the stored user flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDetails {
    pub reply: Reply,
    pub thread_topic: String,
    pub author: AuthorSummary,
}

/// Discussion joined with its parent group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionWithGroup {
    pub discussion: Discussion,
    pub group: DiscussionGroup,
}
