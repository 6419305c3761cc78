//! HTTP request handlers
//!
//! Handlers for all REST API endpoints organized by domain.

pub mod appeals;
pub mod health;
pub mod webhook;
