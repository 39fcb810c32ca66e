//! Projection to view mappers
//!
//! Implements `From` conversions from read projections to view DTOs, and the
//! in-memory assembly of the group listing.

use std::collections::HashMap;

use forum_core::entities::{Discussion, DiscussionGroup};
use forum_core::projections::{
    AuthorSummary, DiscussionWithGroup, ReplyDetails, ThreadDetails, ThreadReplyCount,
};
use forum_core::value_objects::{DiscussionGroupId, DiscussionId};

use super::responses::{
    AuthorView, DiscussionGroupSummaryView, DiscussionGroupView, DiscussionView, ReplyView,
    ThreadCountView, ThreadView,
};

// ============================================================================
// Author / Thread / Reply Mappers
// ============================================================================

impl From<AuthorSummary> for AuthorView {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.user_id,
            name: author.name,
            is_instructor: author.is_instructor,
        }
    }
}

impl From<ThreadDetails> for ThreadView {
    fn from(details: ThreadDetails) -> Self {
        let thread = details.thread;
        Self {
            id: thread.id,
            discussion_id: thread.discussion_id,
            topic: thread.topic,
            detail: thread.detail,
            inserted_at: thread.inserted_at,
            upvote: thread.upvote,
            reply_count: details.reply_count,
            user: AuthorView::from(details.author),
        }
    }
}

impl From<ReplyDetails> for ReplyView {
    fn from(details: ReplyDetails) -> Self {
        let reply = details.reply;
        Self {
            id: reply.id,
            thread_id: reply.thread_id,
            topic: details.thread_topic,
            detail: reply.detail,
            inserted_at: reply.inserted_at,
            upvote: reply.upvote,
            user: AuthorView::from(details.author),
        }
    }
}

impl From<ThreadReplyCount> for ThreadCountView {
    fn from(count: ThreadReplyCount) -> Self {
        Self {
            id: count.thread_id,
            reply_count: count.reply_count,
        }
    }
}

// ============================================================================
// Discussion Mappers
// ============================================================================

impl From<&DiscussionGroup> for DiscussionGroupSummaryView {
    fn from(group: &DiscussionGroup) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            photo_url: group.photo_url.clone(),
        }
    }
}

/// Single discussion: parent group attached, thread list left out
impl From<DiscussionWithGroup> for DiscussionView {
    fn from(dwg: DiscussionWithGroup) -> Self {
        Self {
            id: dwg.discussion.id,
            name: dwg.discussion.name,
            discussion_group_id: dwg.discussion.discussion_group_id,
            discussion_group: Some(DiscussionGroupSummaryView::from(&dwg.group)),
            threads: None,
        }
    }
}

/// Rows of the three group-listing queries
#[derive(Debug, Default)]
pub struct GroupListing {
    pub groups: Vec<DiscussionGroup>,
    pub discussions: Vec<Discussion>,
    pub reply_counts: Vec<ThreadReplyCount>,
}

impl GroupListing {
    /// Nest threads under discussions and discussions under groups
    ///
    /// Input order is kept at every level. Rows whose parent is not in the
    /// listing are dropped.
    pub fn into_views(self) -> Vec<DiscussionGroupView> {
        let mut threads_by_discussion: HashMap<DiscussionId, Vec<ThreadCountView>> = HashMap::new();
        for count in self.reply_counts {
            threads_by_discussion
                .entry(count.discussion_id)
                .or_default()
                .push(ThreadCountView::from(count));
        }

        let mut discussions_by_group: HashMap<DiscussionGroupId, Vec<DiscussionView>> =
            HashMap::new();
        for discussion in self.discussions {
            let threads = threads_by_discussion
                .remove(&discussion.id)
                .unwrap_or_default();
            discussions_by_group
                .entry(discussion.discussion_group_id)
                .or_default()
                .push(DiscussionView {
                    id: discussion.id,
                    name: discussion.name,
                    discussion_group_id: discussion.discussion_group_id,
                    discussion_group: None,
                    threads: Some(threads),
                });
        }

        self.groups
            .into_iter()
            .map(|group| DiscussionGroupView {
                discussions: discussions_by_group.remove(&group.id).unwrap_or_default(),
                id: group.id,
                name: group.name,
                photo_url: group.photo_url,
            })
            .collect()
    }
}
