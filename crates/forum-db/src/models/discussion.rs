//! Discussion database models

use sqlx::FromRow;

/// Database model for discussions table
#[derive(Debug, Clone, FromRow)]
pub struct DiscussionModel {
    pub id: i32,
    pub discussion_group_id: i32,
    pub name: String,
}

/// Discussion row joined with its parent group
#[derive(Debug, Clone, FromRow)]
pub struct DiscussionWithGroupModel {
    pub id: i32,
    pub discussion_group_id: i32,
    pub name: String,
    pub group_name: String,
    pub group_photo_url: String,
}
