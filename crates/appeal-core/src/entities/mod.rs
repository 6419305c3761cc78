//! Domain entities - core business objects

mod appeal;

pub use appeal::{Appeal, AppealStatus, BanReason, NewAppeal};
