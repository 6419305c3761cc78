//! Entity to model mappers
//!
//! - `TryFrom<AppealModel> for Appeal`: rows carry free text, so decoding can fail
//! - `From<AppealRecord>` / `From<&Appeal>`: the JSON document is already typed
//! - `AppealInsert`: borrowed column values for an INSERT

mod appeal;

pub use appeal::AppealInsert;
