//! Discussion service
//!
//! Read projections over groups and discussions.

use forum_core::value_objects::DiscussionId;
use tracing::{debug, instrument};

use crate::dto::{DiscussionGroupView, DiscussionView, GroupListing};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Discussion service
pub struct DiscussionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiscussionService<'a> {
    /// Create a new DiscussionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every group with its discussions and their threads
    ///
    /// Threads carry only their id and reply count; authors are not loaded.
    #[instrument(skip(self))]
    pub async fn list_discussion_groups(&self) -> ServiceResult<Vec<DiscussionGroupView>> {
        let listing = GroupListing {
            groups: self.ctx.group_repo().find_all().await?,
            discussions: self.ctx.discussion_repo().find_all().await?,
            reply_counts: self.ctx.thread_repo().reply_counts().await?,
        };

        debug!(
            groups = listing.groups.len(),
            discussions = listing.discussions.len(),
            threads = listing.reply_counts.len(),
            "Assembling group listing"
        );

        Ok(listing.into_views())
    }

    /// Get a discussion with its parent group; its threads are not loaded
    #[instrument(skip(self))]
    pub async fn get_discussion(&self, id: DiscussionId) -> ServiceResult<Option<DiscussionView>> {
        let discussion = self.ctx.discussion_repo().find_with_group(id).await?;
        Ok(discussion.map(DiscussionView::from))
    }
}
