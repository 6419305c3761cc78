//! # appeal-core
//!
//! Domain layer containing the appeal entity, value objects, and the store trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Appeal, AppealStatus, BanReason, NewAppeal};
pub use error::DomainError;
pub use traits::{AppealRepository, RepoResult};
pub use value_objects::{AppealId, AppealIdParseError};
