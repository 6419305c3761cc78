//! Storage models - row and document shapes for the two backends

mod appeal;

pub use appeal::{AppealModel, AppealRecord};
