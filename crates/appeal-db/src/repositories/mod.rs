//! Repository implementations
//!
//! Two interchangeable backends for `AppealRepository` and the decorator
//! that composes them.

mod appeal;
mod error;
mod fallback;
mod local;

pub use appeal::PgAppealRepository;
pub use fallback::FallbackAppealRepository;
pub use local::LocalAppealRepository;
