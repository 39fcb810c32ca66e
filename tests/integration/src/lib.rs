//! Integration test utilities for the forum backend
//!
//! This crate provides helpers for running end-to-end tests of the forum
//! service against a PostgreSQL database.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
