//! Value objects - immutable domain primitives

mod appeal_id;

pub use appeal_id::{AppealId, AppealIdParseError};
