//! DiscussionGroup entity - top-level forum category

use crate::value_objects::DiscussionGroupId;

/// Discussion group (e.g. "Angular Discussion")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionGroup {
    pub id: DiscussionGroupId,
    pub name: String,
    pub photo_url: String,
}

impl DiscussionGroup {
    /// Create a new DiscussionGroup
    pub fn new(id: DiscussionGroupId, name: String, photo_url: String) -> Self {
        Self {
            id,
            name,
            photo_url,
        }
    }

    /// Whether the group has a photo configured
    #[inline]
    pub fn has_photo(&self) -> bool {
        !self.photo_url.is_empty()
    }
}
