//! Discussion entity - a sub-board within a group

use crate::value_objects::{DiscussionGroupId, DiscussionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discussion {
    pub id: DiscussionId,
    pub discussion_group_id: DiscussionGroupId,
    pub name: String,
}

impl Discussion {
    /// Create a new Discussion
    pub fn new(id: DiscussionId, discussion_group_id: DiscussionGroupId, name: String) -> Self {
        Self {
            id,
            discussion_group_id,
            name,
        }
    }

    /// Check if the discussion belongs to a group
    #[inline]
    pub fn belongs_to(&self, group_id: DiscussionGroupId) -> bool {
        self.discussion_group_id == group_id
    }
}
