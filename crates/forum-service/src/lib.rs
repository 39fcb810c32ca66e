//! # forum-service
//!
//! Application layer containing the forum services and their DTOs.
//!
//! [`ForumService`] is the entry point: it exposes the read projections
//! (group listing, discussion, threads, replies), the thread/reply mutations
//! and upvote adjustment over a [`ServiceContext`] of repositories.

pub mod dto;
pub mod services;

pub use services::{ForumService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};

#[cfg(test)]
pub(crate) mod test_support;
