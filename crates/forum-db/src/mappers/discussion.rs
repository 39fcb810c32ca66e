//! DiscussionGroup and Discussion model -> entity mappers

use forum_core::entities::{Discussion, DiscussionGroup};
use forum_core::projections::DiscussionWithGroup;
use forum_core::value_objects::{DiscussionGroupId, DiscussionId};

use crate::models::{DiscussionGroupModel, DiscussionModel, DiscussionWithGroupModel};

/// Convert DiscussionGroupModel to DiscussionGroup entity
impl From<DiscussionGroupModel> for DiscussionGroup {
    fn from(model: DiscussionGroupModel) -> Self {
        DiscussionGroup {
            id: DiscussionGroupId::new(model.id),
            name: model.name,
            photo_url: model.photo_url,
        }
    }
}

/// Convert DiscussionModel to Discussion entity
impl From<DiscussionModel> for Discussion {
    fn from(model: DiscussionModel) -> Self {
        Discussion {
            id: DiscussionId::new(model.id),
            discussion_group_id: DiscussionGroupId::new(model.discussion_group_id),
            name: model.name,
        }
    }
}

/// Split a joined row into the discussion and its group
impl From<DiscussionWithGroupModel> for DiscussionWithGroup {
    fn from(model: DiscussionWithGroupModel) -> Self {
        let group_id = DiscussionGroupId::new(model.discussion_group_id);
        DiscussionWithGroup {
            discussion: Discussion {
                id: DiscussionId::new(model.id),
                discussion_group_id: group_id,
                name: model.name,
            },
            group: DiscussionGroup {
                id: group_id,
                name: model.group_name,
                photo_url: model.group_photo_url,
            },
        }
    }
}
