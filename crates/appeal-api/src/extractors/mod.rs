//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, JSON bodies, and path IDs.

mod auth;
mod path;
mod validated;

pub use auth::AdminUser;
pub use path::AppealIdPath;
pub use validated::{AppJson, ValidatedJson};
