//! Integration test utilities for the ban appeal server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, including a stand-in chat webhook.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
