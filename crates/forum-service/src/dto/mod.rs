//! Data transfer objects for forum requests and views
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - View DTOs returned by the projection operations
//! - Mappers for converting read projections to views

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateReplyRequest, CreateThreadRequest, UpdateReplyRequest, UpdateThreadRequest, VoteRequest,
};

pub use responses::{
    AuthorView, DiscussionGroupSummaryView, DiscussionGroupView, DiscussionView, ReplyView,
    ThreadCountView, ThreadView, VoteResponse,
};

pub use mappers::GroupListing;
