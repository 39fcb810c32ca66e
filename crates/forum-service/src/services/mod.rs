//! Business logic services
//!
//! Projections, mutations and voting, composed by the [`ForumService`] facade.

pub mod context;
pub mod discussion;
pub mod error;
pub mod forum;
pub mod reply;
pub mod thread;
pub mod vote;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use discussion::DiscussionService;
pub use error::{ServiceError, ServiceResult};
pub use forum::ForumService;
pub use reply::ReplyService;
pub use thread::ThreadService;
pub use vote::VoteService;
