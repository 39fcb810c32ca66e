//! Discussion group database model

use sqlx::FromRow;

/// Database model for discussion_groups table
#[derive(Debug, Clone, FromRow)]
pub struct DiscussionGroupModel {
    pub id: i32,
    pub name: String,
    pub photo_url: String,
}
